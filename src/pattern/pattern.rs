// Wed Oct 14 2026 - Alex

use std::fmt;

/// Byte signature with wildcards, e.g. `48 8B 05 ? ? ? ? C3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    bytes: Vec<u8>,
    mask: Vec<bool>,
}

impl Pattern {
    /// Parses an IDA-style signature. `?` and `??` are wildcards, tokens
    /// that are not hex are skipped.
    pub fn from_ida_pattern(pattern: &str) -> Self {
        let mut bytes = Vec::new();
        let mut mask = Vec::new();

        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            if c == '?' {
                bytes.push(0);
                mask.push(false);
                if chars.peek() == Some(&'?') {
                    chars.next();
                }
            } else if let Some(high) = c.to_digit(16) {
                let byte = match chars.peek().and_then(|next| next.to_digit(16)) {
                    Some(low) => {
                        chars.next();
                        (high << 4 | low) as u8
                    }
                    None => high as u8,
                };
                bytes.push(byte);
                mask.push(true);
            }
        }

        Self { bytes, mask }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            mask: vec![true; bytes.len()],
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn matches(&self, data: &[u8]) -> bool {
        if data.len() < self.bytes.len() {
            return false;
        }

        self.bytes
            .iter()
            .zip(self.mask.iter())
            .zip(data.iter())
            .all(|((pattern_byte, &significant), &data_byte)| {
                !significant || *pattern_byte == data_byte
            })
    }

    /// Offset of the first match in `data`.
    pub fn find_in(&self, data: &[u8]) -> Option<usize> {
        if self.bytes.is_empty() || data.len() < self.bytes.len() {
            return None;
        }

        let Some(anchor) = self.mask.iter().position(|&m| m) else {
            return Some(0);
        };
        let anchor_byte = self.bytes[anchor];

        (0..=(data.len() - self.bytes.len()))
            .find(|&i| data[i + anchor] == anchor_byte && self.matches(&data[i..]))
    }

    pub fn to_hex_string(&self) -> String {
        self.bytes
            .iter()
            .zip(self.mask.iter())
            .map(|(b, &m)| if m { format!("{:02X}", b) } else { "?".to_string() })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}
