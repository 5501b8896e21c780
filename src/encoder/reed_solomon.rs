/// Reed-Solomon error correction for QR codes
/// Generator polynomials have roots alpha^0 .. alpha^(n-1) over GF(256)
use std::sync::OnceLock;

use crate::encoder::gf256::Gf256;
use crate::encoder::version::VersionSpec;
use crate::error::EncodeError;

/// Error correction codeword counts with a generator polynomial
pub const SUPPORTED_EC_COUNTS: [usize; 13] = [7, 10, 13, 15, 16, 17, 18, 20, 22, 24, 26, 28, 30];

static GENERATORS: OnceLock<Vec<(usize, Vec<u8>)>> = OnceLock::new();

fn build_generator(degree: usize) -> Vec<u8> {
    // Descending coefficients, leading 1
    let mut poly = vec![1u8];
    for i in 0..degree {
        let root = Gf256::exp(i);
        let mut next = vec![0u8; poly.len() + 1];
        for (j, &coef) in poly.iter().enumerate() {
            next[j] ^= coef;
            next[j + 1] ^= Gf256::mul(coef, root);
        }
        poly = next;
    }
    poly
}

/// Monic generator polynomial of degree `ec_count`, descending coefficients
pub fn generator_polynomial(ec_count: usize) -> Result<&'static [u8], EncodeError> {
    let table = GENERATORS.get_or_init(|| {
        SUPPORTED_EC_COUNTS
            .iter()
            .map(|&n| (n, build_generator(n)))
            .collect()
    });
    table
        .iter()
        .find(|(n, _)| *n == ec_count)
        .map(|(_, poly)| poly.as_slice())
        .ok_or(EncodeError::UnsupportedConfiguration {
            ec_codewords: ec_count,
        })
}

/// Remainder of `dividend` divided by the monic `divisor`, both descending.
///
/// Returns the last `divisor.len() - 1` coefficients.
pub fn poly_remainder(dividend: &[u8], divisor: &[u8]) -> Vec<u8> {
    debug_assert_eq!(divisor.first(), Some(&1));
    let degree = divisor.len() - 1;
    let mut work = dividend.to_vec();
    if work.len() < divisor.len() {
        let mut padded = vec![0u8; divisor.len() - work.len()];
        padded.extend_from_slice(&work);
        work = padded;
    }
    for i in 0..=(work.len() - divisor.len()) {
        let coef = work[i];
        if coef == 0 {
            continue;
        }
        for (j, &g) in divisor.iter().enumerate() {
            work[i + j] ^= Gf256::mul(g, coef);
        }
    }
    work.split_off(work.len() - degree)
}

/// Error correction codewords for one block of data codewords
pub fn compute_ecc(data: &[u8], ec_count: usize) -> Result<Vec<u8>, EncodeError> {
    let generator = generator_polynomial(ec_count)?;
    let mut message = Vec::with_capacity(data.len() + ec_count);
    message.extend_from_slice(data);
    message.resize(data.len() + ec_count, 0);
    Ok(poly_remainder(&message, generator))
}

/// Split data into blocks, append per-block ECC and interleave.
///
/// Output order: data codewords column-wise across blocks, then ECC column-wise.
pub fn interleave_with_ecc(data: &[u8], spec: &VersionSpec) -> Result<Vec<u8>, EncodeError> {
    debug_assert_eq!(data.len(), spec.data_codewords);
    let lengths = spec.block_lengths();

    let mut blocks: Vec<&[u8]> = Vec::with_capacity(lengths.len());
    let mut offset = 0;
    for len in &lengths {
        blocks.push(&data[offset..offset + len]);
        offset += len;
    }
    let ecc_blocks = blocks
        .iter()
        .map(|block| compute_ecc(block, spec.ec_codewords_per_block))
        .collect::<Result<Vec<_>, _>>()?;

    let mut out = Vec::with_capacity(spec.total_codewords());
    let longest = lengths.iter().copied().max().unwrap_or(0);
    for i in 0..longest {
        for block in &blocks {
            if let Some(&cw) = block.get(i) {
                out.push(cw);
            }
        }
    }
    for i in 0..spec.ec_codewords_per_block {
        for ecc in &ecc_blocks {
            out.push(ecc[i]);
        }
    }
    Ok(out)
}
