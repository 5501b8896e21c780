/// GF(256) arithmetic for QR error correction
/// Field defined by the primitive polynomial x^8 + x^4 + x^3 + x^2 + 1, generator element 2
pub struct Gf256;

/// Primitive polynomial of the QR field
pub const PRIMITIVE_POLY: u16 = 0x11D;

struct Tables {
    /// alpha^i, doubled so a sum of two logs never needs a modulo
    exp: [u8; 512],
    /// log_alpha(x) for x in 1..=255; entry 0 is unused
    log: [u8; 256],
}

const fn build_tables() -> Tables {
    let mut exp = [0u8; 512];
    let mut log = [0u8; 256];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 255 {
        exp[i] = x as u8;
        log[x as usize] = i as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE_POLY;
        }
        i += 1;
    }
    while i < 512 {
        exp[i] = exp[i - 255];
        i += 1;
    }
    Tables { exp, log }
}

static TABLES: Tables = build_tables();

impl Gf256 {
    /// Multiply two field elements
    #[inline]
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        TABLES.exp[TABLES.log[a as usize] as usize + TABLES.log[b as usize] as usize]
    }

    /// alpha^n for any non-negative exponent
    #[inline]
    pub fn exp(n: usize) -> u8 {
        TABLES.exp[n % 255]
    }
}
