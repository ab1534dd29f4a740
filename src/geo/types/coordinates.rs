use anyhow::{ensure, Result};

/// One coordinate tuple with two or three numeric axes.
pub type Position = Vec<f64>;

/// An ordered position sequence forming a polygon ring.
///
/// Rings are stored as given; closure and winding are not normalized.
pub type Ring = Vec<Position>;

/// Checks that a position has two or three axes.
pub fn verify_position(position: &[f64]) -> Result<()> {
	ensure!(
		matches!(position.len(), 2 | 3),
		"a position needs two or three axes, got {}",
		position.len()
	);
	Ok(())
}

/// Checks every position of a sequence.
pub fn verify_positions(positions: &[Position]) -> Result<()> {
	for position in positions {
		verify_position(position)?;
	}
	Ok(())
}

/// Checks every position of every ring.
pub fn verify_rings(rings: &[Ring]) -> Result<()> {
	for ring in rings {
		verify_positions(ring)?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_two_and_three_axes() {
		assert!(verify_position(&[1.0, 2.0]).is_ok());
		assert!(verify_position(&[1.0, 2.0, 3.0]).is_ok());
	}

	#[test]
	fn rejects_other_ranks() {
		assert!(verify_position(&[1.0]).is_err());
		assert!(verify_position(&[1.0, 2.0, 3.0, 4.0]).is_err());
		assert_eq!(
			verify_position(&[]).unwrap_err().to_string(),
			"a position needs two or three axes, got 0"
		);
	}

	#[test]
	fn checks_nested_sequences() {
		assert!(verify_positions(&[vec![0.0, 0.0], vec![1.0, 1.0]]).is_ok());
		assert!(verify_positions(&[vec![0.0, 0.0], vec![1.0]]).is_err());
		assert!(verify_rings(&[vec![vec![0.0, 0.0]], vec![vec![1.0]]]).is_err());
	}
}
