use thiserror::Error;

/// Errors raised while building the logo engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LogoError {
	/// The symbol ring needs at least one node
	#[error("num_symbol_nodes must be at least 1, got {0}")]
	TooFewSymbolNodes(usize),

	/// The graph needs at least two rings
	#[error("num_vertices must be at least 2, got {0}")]
	TooFewVertices(usize),

	/// A timer interval or animation duration is zero or negative
	#[error("{name} must be positive, got {value}")]
	NonPositiveDuration {
		/// Name of the offending setting
		name: &'static str,
		/// The rejected value
		value: f64,
	},

	/// The display surface has no area
	#[error("invalid dimensions {width}x{height}")]
	InvalidDimensions {
		/// Requested width
		width: f64,
		/// Requested height
		height: f64,
	},
}
