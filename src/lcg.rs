use wrapping_arithmetic::wrappit;

// Arithmetic for congruential generators with a power-of-two modulus.
// State is held in a u128. Iterating with wrapping arithmetic mod 2**128
// and masking afterwards is exact for every modulus up to 2**128.

/// Returns the mask that reduces a value modulo 2**exponent.
#[inline]
pub fn mask(exponent: u32) -> u128 {
    if exponent >= 128 { u128::MAX } else { (1u128 << exponent) - 1 }
}

/// Congruential iteration is state <- state * a + c.
/// Returns the next state, reduced by the modulus mask.
#[wrappit] #[inline]
pub fn step(a: u128, c: u128, state: u128, mask: u128) -> u128 {
    (state * a + c) & mask
}

/// Congruential iteration is state <- state * a + c.
/// Returns the (a, c) pair that iterates by n steps at once, modulo 2**128.
/// Holds for any (a, c), including the multiplicative case c = 0.
#[wrappit]
pub fn get_jump(a: u128, c: u128, n: u128) -> (u128, u128) {
    // Algorithm from Brown, F. B., "Random Number Generation with Arbitrary Stride",
    // Transactions of the American Nuclear Society, 1994.
    let mut unit_a = a;
    let mut unit_c = c;
    let mut jump_a: u128 = 1;
    let mut jump_c: u128 = 0;
    let mut delta = n;

    while delta > 0 {
        if delta & 1 == 1 {
            jump_a = jump_a * unit_a;
            jump_c = jump_c * unit_a + unit_c;
        }
        unit_c = (unit_a + 1) * unit_c;
        unit_a *= unit_a;
        delta >>= 1;
    }
    (jump_a, jump_c)
}

/// Congruential iteration is state <- state * a + c.
/// Returns state after the specified number of iterations from the origin state.
pub fn get_state(a: u128, c: u128, origin: u128, iterations: u128, mask: u128) -> u128 {
    let (jump_a, jump_c) = get_jump(a, c, iterations);
    step(jump_a, jump_c, origin, mask)
}

/// Greatest common divisor. gcd(x, 0) = x.
pub fn gcd(mut x: u128, mut y: u128) -> u128 {
    while y != 0 {
        let t = x % y;
        x = y;
        y = t;
    }
    x
}
