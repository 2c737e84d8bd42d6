// SPDX-License-Identifier: GPL-3.0-only

//! Barcode format code lookup
//!
//! The detector reports barcode formats as integer codes. The codes are
//! bitmask values, so several can be OR-ed together when configuring which
//! symbologies to look for, but a detected barcode always carries exactly
//! one. Consumers receive string labels instead of raw codes; the mapping
//! lives here as a pair of total functions with fallbacks, so an
//! unrecognized code can never fail an event on its way out.

/// Label reported for format codes with no table entry
pub const UNKNOWN_FORMAT: &str = "UNKNOWN_FORMAT";

/// Code reported for labels with no table entry
pub const UNKNOWN_FORMAT_CODE: i32 = -1;

/// Matches every symbology when configuring detection
pub const ALL_FORMATS: i32 = 0;
pub const CODE_128: i32 = 1;
pub const CODE_39: i32 = 2;
pub const CODE_93: i32 = 4;
pub const CODABAR: i32 = 8;
pub const DATA_MATRIX: i32 = 16;
pub const EAN_13: i32 = 32;
pub const EAN_8: i32 = 64;
pub const ITF: i32 = 128;
pub const QR_CODE: i32 = 256;
pub const UPC_A: i32 = 512;
pub const UPC_E: i32 = 1024;
pub const PDF417: i32 = 2048;
pub const AZTEC: i32 = 4096;

/// Map a detector format code to its label
///
/// Total over `i32`: unmapped codes yield [`UNKNOWN_FORMAT`].
pub fn format_label(code: i32) -> &'static str {
    match code {
        ALL_FORMATS => "ALL",
        CODE_128 => "CODE_128",
        CODE_39 => "CODE_39",
        CODE_93 => "CODE_93",
        CODABAR => "CODABAR",
        DATA_MATRIX => "DATA_MATRIX",
        EAN_13 => "EAN_13",
        EAN_8 => "EAN_8",
        ITF => "ITF",
        QR_CODE => "QR_CODE",
        UPC_A => "UPC_A",
        UPC_E => "UPC_E",
        PDF417 => "PDF417",
        AZTEC => "AZTEC",
        _ => UNKNOWN_FORMAT,
    }
}

/// Map a format label back to the detector's code
///
/// Used when translating string detection options into a detector
/// configuration. Total: unmapped labels yield [`UNKNOWN_FORMAT_CODE`].
pub fn format_code(label: &str) -> i32 {
    match label {
        "ALL" => ALL_FORMATS,
        "CODE_128" => CODE_128,
        "CODE_39" => CODE_39,
        "CODE_93" => CODE_93,
        "CODABAR" => CODABAR,
        "DATA_MATRIX" => DATA_MATRIX,
        "EAN_13" => EAN_13,
        "EAN_8" => EAN_8,
        "ITF" => ITF,
        "QR_CODE" => QR_CODE,
        "UPC_A" => UPC_A,
        "UPC_E" => UPC_E,
        "PDF417" => PDF417,
        "AZTEC" => AZTEC,
        _ => UNKNOWN_FORMAT_CODE,
    }
}
