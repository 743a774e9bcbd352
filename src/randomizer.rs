/// The "modulus" of the recurrence, also the upper bound of the period
pub const MODULUS: i64 = 233280;
/// The "multiplier"
pub const MULTIPLIER: i64 = 9301;
/// The "increment"
pub const INCREMENT: i64 = 49297;

/// A linear congruential generator: `seed = (seed * MULTIPLIER + INCREMENT) % MODULUS`.
///
/// Not thread safe on its own. Either put it behind a mutex or give every consumer
/// its own instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Randomizer {
	// the current state. not reduced until the first sample
	seed: i64,
}

impl Randomizer {
	pub fn new(seed: i64) -> Self {
		Self { seed }
	}
	pub fn seed(&self) -> i64 {
		self.seed
	}
	/// Advances the state and returns it scaled to `[0, 1)`.
	///
	/// A negative seed stays negative after `%` (the remainder takes the sign of the dividend),
	/// in which case the returned value lies in `(-1, 0]`.
	pub fn next_fraction(&mut self) -> f32 {
		// wraps like 64-bit two's complement would. only seeds above ~9.9e14 in magnitude get here
		self.seed = self
			.seed
			.wrapping_mul(MULTIPLIER)
			.wrapping_add(INCREMENT)
			% MODULUS;

		self.seed as f32 / MODULUS as f32
	}
	/// `max * next_fraction()`, rounded to the nearest integer with ties away from zero.
	///
	/// Advances the state exactly once. `max <= 0` is not rejected, the result is just scaled by it.
	pub fn next_int(&mut self, max: i32) -> i32 {
		// `as` saturates at the i32 bounds
		(max as f32 * self.next_fraction()).round() as i32
	}
}
