//! Brand gradient that runs along the curve.
//!
//! Each hue owns a slice of the index range. The tail of every slice blends
//! into the next hue, either over a short ("small") or a wide ("gradual")
//! stretch, and the last hue loops back to the first.

use super::types::Rgb;

pub const PURPLE: Rgb = Rgb(99, 38, 132);
pub const PINK: Rgb = Rgb(206, 48, 121);
pub const DARK_ORANGE: Rgb = Rgb(231, 90, 38);
pub const LIGHT_ORANGE: Rgb = Rgb(246, 162, 60);
pub const BLUE: Rgb = Rgb(52, 120, 198);

const SMALL: f64 = 0.02;
const GRADUAL: f64 = 0.10;

struct Band {
	color: Rgb,
	share: f64,
	/// Width of the blend into the next band, as a share of the total.
	blend: f64,
}

const BANDS: [Band; 5] = [
	Band {
		color: PURPLE,
		share: 0.15,
		blend: GRADUAL,
	},
	Band {
		color: PINK,
		share: 0.15,
		blend: SMALL,
	},
	Band {
		color: DARK_ORANGE,
		share: 0.15,
		blend: GRADUAL,
	},
	Band {
		color: LIGHT_ORANGE,
		share: 0.15,
		blend: SMALL,
	},
	Band {
		color: BLUE,
		share: 0.40,
		blend: SMALL,
	},
];

/// Color for `index` out of `total` evenly spread items.
pub fn band_color(index: usize, total: usize) -> Rgb {
	if total == 0 {
		return PURPLE;
	}
	let position = (index % total) as f64 / total as f64;

	let mut start = 0.0;
	for (i, band) in BANDS.iter().enumerate() {
		let end = start + band.share;
		if position < end || i == BANDS.len() - 1 {
			let blend_start = end - band.blend;
			if position < blend_start {
				return band.color;
			}
			let next = BANDS[(i + 1) % BANDS.len()].color;
			return band.color.lerp(next, (position - blend_start) / band.blend);
		}
		start = end;
	}
	PURPLE
}

#[cfg(test)]
mod tests {
	use super::*;

	fn max_channel_gap(a: Rgb, b: Rgb) -> u8 {
		a.channels()
			.iter()
			.zip(b.channels())
			.map(|(x, y)| x.abs_diff(y))
			.max()
			.unwrap_or(0)
	}

	#[test]
	fn starts_on_pure_purple() {
		assert_eq!(band_color(0, 36).channels(), [99, 38, 132]);
		assert_eq!(band_color(0, 972), PURPLE);
		assert_eq!(band_color(0, 0), PURPLE);
	}

	#[test]
	fn zones_hold_pure_hues() {
		assert_eq!(band_color(20, 1000), PURPLE);
		assert_eq!(band_color(160, 1000), PINK);
		assert_eq!(band_color(300, 1000), DARK_ORANGE);
		assert_eq!(band_color(460, 1000), LIGHT_ORANGE);
		assert_eq!(band_color(700, 1000), BLUE);
	}

	#[test]
	fn blends_at_the_right_widths() {
		// Purple -> pink is gradual: 5%..15%.
		assert_eq!(band_color(49, 1000), PURPLE);
		assert!(max_channel_gap(band_color(100, 1000), PURPLE.lerp(PINK, 0.5)) <= 1);
		// Pink -> dark orange is small: 28%..30%.
		assert_eq!(band_color(279, 1000), PINK);
		assert!(max_channel_gap(band_color(290, 1000), PINK.lerp(DARK_ORANGE, 0.5)) <= 1);
		// Blue loops back into purple over the last 2%.
		assert_eq!(band_color(979, 1000), BLUE);
		assert!(max_channel_gap(band_color(990, 1000), BLUE.lerp(PURPLE, 0.5)) <= 1);
	}

	#[test]
	fn boundaries_are_continuous() {
		let total = 1000;
		// Widest hue gap is light orange -> blue (194) over 20 steps,
		// plus rounding on both sides.
		let widest_step = 194 / 20 + 2;
		for i in 0..total {
			let (a, b) = (band_color(i, total), band_color(i + 1, total));
			assert!(
				max_channel_gap(a, b) <= widest_step,
				"jump between {i} and {}: {a:?} -> {b:?}",
				i + 1
			);
		}
	}

	#[test]
	fn index_wraps_around_total() {
		assert_eq!(band_color(1036, 1000), band_color(36, 1000));
	}
}
