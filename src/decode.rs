//! Input reading and mojibake repair
//!
//! Inputs frequently arrive with a handful of double-encoded UTF-8
//! artifacts (UTF-8 bytes that were re-decoded as Latin-1 somewhere
//! upstream). Rather than attempting general encoding detection, this
//! module applies a fixed table of literal substring replacements for the
//! five sequences that actually show up in practice.
//!
//! The table is deliberately isolated behind [`repair_encoding`] so it can
//! later be replaced with a real encoding-detection step without touching
//! the rest of the pipeline. Known fragility: the replacements are naive
//! and will also rewrite unrelated text that happens to contain the same
//! byte patterns.

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::io::Read;

/// Garbled sequence → correct character, applied in order.
const REPAIRS: [(&str, &str); 5] = [
    ("\u{c3}\u{bc}", "ü"),
    ("\u{c3}\u{b6}", "ö"),
    ("\u{c3}\u{a4}", "ä"),
    // Bytes C3 97 come back as Ã + em dash under Windows-1252, not Ã + a
    // C1 control (0x97 is remapped); the other four entries land on bytes
    // where Latin-1 and Windows-1252 agree.
    ("\u{c3}\u{2014}", "×"),
    ("\u{c3}\u{a9}", "é"),
];

/// Read all input from a reader as UTF-8 text
pub fn read_input(reader: &mut impl Read) -> Result<String> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .context("Failed to read input from stdin")?;

    log::debug!("Read {} byte(s) of input", input.len());

    Ok(input)
}

/// Repair known double-encoded UTF-8 sequences
///
/// Returns the input unchanged (and unallocated) when none of the known
/// garbled sequences occur. Idempotent: the replacement characters never
/// match the garbled forms, so repairing already-clean text is a no-op.
pub fn repair_encoding(text: &str) -> Cow<'_, str> {
    if !REPAIRS.iter().any(|(garbled, _)| text.contains(garbled)) {
        return Cow::Borrowed(text);
    }

    let mut repaired = text.to_string();
    for (garbled, correct) in REPAIRS {
        repaired = repaired.replace(garbled, correct);
    }

    log::debug!("Applied mojibake repair ({} -> {} bytes)", text.len(), repaired.len());

    Cow::Owned(repaired)
}
