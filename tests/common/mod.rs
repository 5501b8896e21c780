//! Minimal independent QR reader used to verify encoder output.
//!
//! Reads format and version information, unmasks, extracts the zigzag
//! bitstream, deinterleaves blocks, checks every block's Reed-Solomon
//! syndromes and parses the byte-mode segment. Shares no code with the
//! encoder beyond the `BitMatrix` container.

#![allow(dead_code)]

use qr_card::BitMatrix;

// Level L, index = version
const TOTAL_CODEWORDS: [usize; 11] = [0, 26, 44, 70, 100, 134, 172, 196, 242, 292, 346];
const ECC_PER_BLOCK: [usize; 11] = [0, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18];
const NUM_BLOCKS: [usize; 11] = [0, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4];
const ALIGNMENT: [&[usize]; 11] = [
    &[],
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
];

/// Result of reading a symbol
#[derive(Debug)]
pub struct Decoded {
    pub version: usize,
    pub mask: u8,
    pub payload: Vec<u8>,
}

/// Bitwise GF(256) multiply over 0x11D
fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        let carry = a & 0x80 != 0;
        a <<= 1;
        if carry {
            a ^= 0x1D;
        }
        b >>= 1;
    }
    product
}

fn mask_bit(mask: u8, row: usize, col: usize) -> bool {
    let (i, j) = (row, col);
    match mask {
        0 => (i + j) % 2 == 0,
        1 => i % 2 == 0,
        2 => j % 3 == 0,
        3 => (i + j) % 3 == 0,
        4 => (i / 2 + j / 3) % 2 == 0,
        5 => (i * j) % 2 + (i * j) % 3 == 0,
        6 => ((i * j) % 2 + (i * j) % 3) % 2 == 0,
        _ => ((i + j) % 2 + (i * j) % 3) % 2 == 0,
    }
}

fn bch_remainder(mut value: u32, generator: u32, data_bits: u32, degree: u32) -> u32 {
    for shift in (0..data_bits).rev() {
        if value & (1 << (shift + degree)) != 0 {
            value ^= generator << shift;
        }
    }
    value
}

/// Read the two 15-bit format copies, MSB first
fn read_format(m: &BitMatrix) -> (u16, u16) {
    let size = m.width();
    let mut first = 0u16;
    // Row 8, columns 0-5, 7, 8 then column 8, rows 7, 5-0
    let mut cells: Vec<(usize, usize)> = (0..6).map(|c| (c, 8)).collect();
    cells.extend([(7, 8), (8, 8), (8, 7)]);
    cells.extend((0..6).rev().map(|r| (8, r)));
    for (x, y) in cells {
        first = (first << 1) | m.get(x, y) as u16;
    }

    let mut second = 0u16;
    // Column 8 bottom-up, then row 8 left to right
    let mut cells: Vec<(usize, usize)> = (size - 7..size).rev().map(|r| (8, r)).collect();
    cells.extend((size - 8..size).map(|c| (c, 8)));
    for (x, y) in cells {
        second = (second << 1) | m.get(x, y) as u16;
    }
    (first, second)
}

fn function_mask(version: usize, size: usize) -> BitMatrix {
    let mut f = BitMatrix::new(size, size);
    let mark = |f: &mut BitMatrix, x0: usize, y0: usize, w: usize, h: usize| {
        for y in y0..(y0 + h).min(size) {
            for x in x0..(x0 + w).min(size) {
                f.set(x, y, true);
            }
        }
    };
    // Finders with separators
    mark(&mut f, 0, 0, 8, 8);
    mark(&mut f, size - 8, 0, 8, 8);
    mark(&mut f, 0, size - 8, 8, 8);
    // Timing
    mark(&mut f, 0, 6, size, 1);
    mark(&mut f, 6, 0, 1, size);
    // Alignment
    let align = ALIGNMENT[version];
    for &cy in align {
        for &cx in align {
            let corner = (cx <= 8 && cy <= 8)
                || (cx >= size - 9 && cy <= 8)
                || (cx <= 8 && cy >= size - 9);
            if !corner {
                mark(&mut f, cx - 2, cy - 2, 5, 5);
            }
        }
    }
    // Format strips and dark module
    mark(&mut f, 0, 8, 9, 1);
    mark(&mut f, 8, 0, 1, 9);
    mark(&mut f, size - 8, 8, 8, 1);
    mark(&mut f, 8, size - 8, 1, 8);
    // Version blocks
    if version >= 7 {
        mark(&mut f, size - 11, 0, 3, 6);
        mark(&mut f, 0, size - 11, 6, 3);
    }
    f
}

fn extract_bits(m: &BitMatrix, func: &BitMatrix, mask: u8) -> Vec<bool> {
    let size = m.width();
    let mut bits = Vec::new();
    let mut upward = true;
    let mut col = size as i32 - 1;
    while col > 0 {
        if col == 6 {
            col -= 1;
            continue;
        }
        for step in 0..size {
            let row = if upward { size - 1 - step } else { step };
            for c in [col as usize, col as usize - 1] {
                if !func.get(c, row) {
                    bits.push(m.get(c, row) ^ mask_bit(mask, row, c));
                }
            }
        }
        upward = !upward;
        col -= 2;
    }
    bits
}

fn syndromes_clear(block: &[u8], ecc: usize) -> bool {
    let mut root = 1u8;
    for _ in 0..ecc {
        let mut s = 0u8;
        for &c in block {
            s = gf_mul(s, root) ^ c;
        }
        if s != 0 {
            return false;
        }
        root = gf_mul(root, 2);
    }
    true
}

fn take(bits: &[bool], pos: &mut usize, n: usize) -> Result<u32, String> {
    if *pos + n > bits.len() {
        return Err(format!("bitstream ended at {} reading {} bits", *pos, n));
    }
    let mut v = 0u32;
    for _ in 0..n {
        v = (v << 1) | bits[*pos] as u32;
        *pos += 1;
    }
    Ok(v)
}

/// Decode a symbol produced by the encoder, validating every structure on the way
pub fn read_symbol(m: &BitMatrix) -> Result<Decoded, String> {
    let size = m.width();
    if size < 21 || (size - 17) % 4 != 0 || m.height() != size {
        return Err(format!("invalid symbol size {size}"));
    }
    let version = (size - 17) / 4;
    if version > 10 {
        return Err(format!("unsupported version {version}"));
    }

    let (first, second) = read_format(m);
    if first != second {
        return Err(format!("format copies differ: {first:015b} vs {second:015b}"));
    }
    let unmasked = (first ^ 0x5412) as u32;
    if bch_remainder(unmasked, 0x537, 5, 10) != 0 {
        return Err(format!("format word {first:015b} fails BCH check"));
    }
    let data = unmasked >> 10;
    if data >> 3 != 0b01 {
        return Err(format!("expected level L, got indicator {:02b}", data >> 3));
    }
    let mask = (data & 7) as u8;

    if !m.get(8, size - 8) {
        return Err("dark module missing".into());
    }

    if version >= 7 {
        let mut tr = 0u32;
        let mut bl = 0u32;
        for i in (0..18).rev() {
            tr = (tr << 1) | m.get(size - 11 + i % 3, i / 3) as u32;
            bl = (bl << 1) | m.get(i / 3, size - 11 + i % 3) as u32;
        }
        if tr != bl || tr >> 12 != version as u32 || bch_remainder(tr, 0x1F25, 6, 12) != 0 {
            return Err(format!("bad version information {tr:018b}"));
        }
    }

    let func = function_mask(version, size);
    let bits = extract_bits(m, &func, mask);
    let total = TOTAL_CODEWORDS[version];
    if bits.len() < total * 8 {
        return Err(format!("only {} data modules", bits.len()));
    }
    let codewords: Vec<u8> = bits[..total * 8]
        .chunks(8)
        .map(|c| c.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8))
        .collect();

    let blocks = NUM_BLOCKS[version];
    let ecc = ECC_PER_BLOCK[version];
    let data_total = total - blocks * ecc;
    let short_len = data_total / blocks;
    let long_count = data_total % blocks;
    let lengths: Vec<usize> = (0..blocks)
        .map(|i| if i < blocks - long_count { short_len } else { short_len + 1 })
        .collect();

    let mut block_data: Vec<Vec<u8>> = vec![Vec::new(); blocks];
    let mut idx = 0;
    for i in 0..=short_len {
        for (b, len) in lengths.iter().enumerate() {
            if i < *len {
                block_data[b].push(codewords[idx]);
                idx += 1;
            }
        }
    }
    let mut block_ecc: Vec<Vec<u8>> = vec![Vec::new(); blocks];
    for _ in 0..ecc {
        for cw in block_ecc.iter_mut() {
            cw.push(codewords[idx]);
            idx += 1;
        }
    }

    let mut data_codewords = Vec::with_capacity(data_total);
    for (b, (d, e)) in block_data.iter().zip(block_ecc.iter()).enumerate() {
        let mut full = d.clone();
        full.extend_from_slice(e);
        if !syndromes_clear(&full, ecc) {
            return Err(format!("block {b} has non-zero syndromes"));
        }
        data_codewords.extend_from_slice(d);
    }

    let data_bits: Vec<bool> = data_codewords
        .iter()
        .flat_map(|&cw| (0..8).rev().map(move |i| (cw >> i) & 1 != 0))
        .collect();
    let mut pos = 0;
    let mode = take(&data_bits, &mut pos, 4)?;
    if mode != 0b0100 {
        return Err(format!("expected byte mode, got {mode:04b}"));
    }
    let count_bits = if version <= 9 { 8 } else { 16 };
    let count = take(&data_bits, &mut pos, count_bits)? as usize;
    let mut payload = Vec::with_capacity(count);
    for _ in 0..count {
        payload.push(take(&data_bits, &mut pos, 8)? as u8);
    }

    // Terminator and bit padding are zero
    let aligned = (pos + 4).min(data_bits.len()).div_ceil(8) * 8;
    if data_bits[pos..aligned.min(data_bits.len())].iter().any(|&b| b) {
        return Err("non-zero terminator or bit padding".into());
    }
    // Pad codewords alternate 0xEC 0x11
    for (i, &cw) in data_codewords[aligned / 8..].iter().enumerate() {
        let expected = if i % 2 == 0 { 0xEC } else { 0x11 };
        if cw != expected {
            return Err(format!("pad codeword {i} is {cw:#04x}"));
        }
    }

    Ok(Decoded {
        version,
        mask,
        payload,
    })
}

/// Decode and convert the payload to a string
pub fn read_text(m: &BitMatrix) -> String {
    let decoded = read_symbol(m).unwrap_or_else(|e| panic!("symbol failed to read: {e}"));
    String::from_utf8(decoded.payload).expect("payload is UTF-8")
}
