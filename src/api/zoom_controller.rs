use std::time::Duration;

use tracing::trace;

use crate::error::{ExplorerError, ExplorerResult};
use crate::interaction::{ZoomMode, ZoomTransform, ZoomTransition};

/// Wheel delta to zoom exponent, matching browser zoom behaviours.
const WHEEL_DELTA_EXPONENT: f64 = 0.002;
const DOMAIN_EPSILON: f64 = 1e-9;

/// Zoom/pan state for the year axis.
///
/// Every stored transform is corrected so that its x domain stays inside the
/// selected `[year_min, year_max]` bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomController {
    mode: ZoomMode,
    transform: ZoomTransform,
    transition: Option<ZoomTransition>,
    scale_extent: (f64, f64),
}

impl ZoomController {
    pub fn new(scale_extent: (f64, f64)) -> ExplorerResult<Self> {
        let (min_k, max_k) = scale_extent;
        if !min_k.is_finite() || !max_k.is_finite() || min_k <= 0.0 || min_k > max_k {
            return Err(ExplorerError::InvalidData(
                "zoom scale extent must be finite, > 0 and ordered".to_owned(),
            ));
        }
        Ok(Self {
            mode: ZoomMode::Idle,
            transform: ZoomTransform::IDENTITY,
            transition: None,
            scale_extent,
        })
    }

    #[must_use]
    pub fn mode(&self) -> ZoomMode {
        self.mode
    }

    #[must_use]
    pub fn transform(&self) -> ZoomTransform {
        self.transform
    }

    #[must_use]
    pub fn transition(&self) -> Option<ZoomTransition> {
        self.transition
    }

    #[must_use]
    pub fn scale_extent(&self) -> (f64, f64) {
        self.scale_extent
    }

    /// Current x domain for the given year bounds and plot width.
    #[must_use]
    pub fn x_domain(&self, bounds: (i32, i32), width_px: f64) -> (f64, f64) {
        rescaled_domain(self.transform, bounds, width_px)
    }

    pub fn begin_gesture(&mut self) {
        self.transition = None;
        self.mode = ZoomMode::Zooming;
    }

    /// Applies a gesture transform, clamps it to the bounds and returns the
    /// resulting x domain.
    pub fn update_gesture(
        &mut self,
        transform: ZoomTransform,
        bounds: (i32, i32),
        width_px: f64,
    ) -> ExplorerResult<(f64, f64)> {
        validate_transform(transform)?;
        validate_width(width_px)?;
        self.transition = None;

        let transform = ZoomTransform::new(
            transform.k.clamp(self.scale_extent.0, self.scale_extent.1),
            transform.tx,
        );
        let (corrected, domain) = clamp_to_bounds(transform, bounds, width_px);
        trace!(
            k = corrected.k,
            tx = corrected.tx,
            domain_start = domain.0,
            domain_end = domain.1,
            "zoom gesture update"
        );
        self.transform = corrected;
        Ok(domain)
    }

    pub fn end_gesture(&mut self) {
        self.mode = ZoomMode::Idle;
    }

    /// One-shot wheel zoom around `anchor_px`.
    pub fn wheel_zoom(
        &mut self,
        wheel_delta_y: f64,
        anchor_px: f64,
        bounds: (i32, i32),
        width_px: f64,
    ) -> ExplorerResult<(f64, f64)> {
        if !wheel_delta_y.is_finite() || !anchor_px.is_finite() {
            return Err(ExplorerError::InvalidData(
                "wheel delta and anchor must be finite".to_owned(),
            ));
        }
        let factor = 2f64.powf(-wheel_delta_y * WHEEL_DELTA_EXPONENT);
        let target = self.transform.scaled_around(factor, anchor_px);
        self.begin_gesture();
        let result = self.update_gesture(target, bounds, width_px);
        self.end_gesture();
        result
    }

    /// One-shot drag pan by a pixel delta.
    pub fn pan_by_pixels(
        &mut self,
        delta_px: f64,
        bounds: (i32, i32),
        width_px: f64,
    ) -> ExplorerResult<(f64, f64)> {
        if !delta_px.is_finite() {
            return Err(ExplorerError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }
        let target = self.transform.translated(delta_px);
        self.begin_gesture();
        let result = self.update_gesture(target, bounds, width_px);
        self.end_gesture();
        result
    }

    /// Re-clamps the stored transform after the year bounds changed.
    pub fn reclamp(&mut self, bounds: (i32, i32), width_px: f64) {
        if validate_width(width_px).is_err() {
            return;
        }
        let (corrected, _) = clamp_to_bounds(self.transform, bounds, width_px);
        self.transform = corrected;
    }

    /// Starts an animated reset to the identity transform.
    pub fn reset(&mut self, duration: Duration) {
        self.mode = ZoomMode::Idle;
        if duration.is_zero() || self.transform.is_identity() {
            self.transform = ZoomTransform::IDENTITY;
            self.transition = None;
            return;
        }
        self.transition = Some(ZoomTransition::new(
            self.transform,
            ZoomTransform::IDENTITY,
            duration,
        ));
    }

    /// Steps a running reset transition. Returns `true` when the transform changed.
    pub fn advance(&mut self, delta: Duration, bounds: (i32, i32), width_px: f64) -> bool {
        let Some(mut transition) = self.transition else {
            return false;
        };
        let stepped = transition.step(delta);
        self.transition = if transition.is_finished() {
            None
        } else {
            Some(transition)
        };
        self.transform = if validate_width(width_px).is_ok() {
            clamp_to_bounds(stepped, bounds, width_px).0
        } else {
            stepped
        };
        true
    }
}

fn validate_transform(transform: ZoomTransform) -> ExplorerResult<()> {
    if !transform.k.is_finite() || transform.k <= 0.0 || !transform.tx.is_finite() {
        return Err(ExplorerError::InvalidData(
            "zoom transform must have finite k > 0 and finite tx".to_owned(),
        ));
    }
    Ok(())
}

fn validate_width(width_px: f64) -> ExplorerResult<()> {
    if !width_px.is_finite() || width_px <= 0.0 {
        return Err(ExplorerError::InvalidData(
            "plot width must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

fn rescaled_domain(transform: ZoomTransform, bounds: (i32, i32), width_px: f64) -> (f64, f64) {
    let start = f64::from(bounds.0);
    let end = f64::from(bounds.1);
    let span = end - start;
    if span <= 0.0 || !width_px.is_finite() || width_px <= 0.0 {
        return (start, end);
    }
    let to_domain = |pixel: f64| start + span * transform.invert_x(pixel) / width_px;
    (to_domain(0.0), to_domain(width_px))
}

/// Shifts (never rescales) the rescaled domain back inside the bounds and
/// returns the transform that produces it.
fn clamp_to_bounds(
    transform: ZoomTransform,
    bounds: (i32, i32),
    width_px: f64,
) -> (ZoomTransform, (f64, f64)) {
    let start = f64::from(bounds.0);
    let end = f64::from(bounds.1);
    let span = end - start;
    if span <= 0.0 {
        return (ZoomTransform::IDENTITY, (start, end));
    }

    let (mut domain_start, mut domain_end) = rescaled_domain(transform, bounds, width_px);
    if domain_end - domain_start >= span - DOMAIN_EPSILON {
        return (ZoomTransform::IDENTITY, (start, end));
    }

    let shift = if domain_start < start {
        start - domain_start
    } else if domain_end > end {
        end - domain_end
    } else {
        0.0
    };
    if shift == 0.0 {
        return (transform, (domain_start, domain_end));
    }

    domain_start += shift;
    domain_end += shift;
    let tx = -transform.k * (domain_start - start) * width_px / span;
    (
        ZoomTransform::new(transform.k, tx),
        (domain_start, domain_end),
    )
}

#[cfg(test)]
mod tests {
    use super::{ZoomController, clamp_to_bounds};
    use crate::interaction::ZoomTransform;

    #[test]
    fn panning_past_start_is_shifted_back() {
        let (transform, domain) =
            clamp_to_bounds(ZoomTransform::new(2.0, 200.0), (2000, 2020), 1000.0);
        assert!((domain.0 - 2000.0).abs() <= 1e-9);
        assert!((domain.1 - 2010.0).abs() <= 1e-9);
        assert!((transform.tx - 0.0).abs() <= 1e-9);
    }

    #[test]
    fn rejects_invalid_scale_extent() {
        assert!(ZoomController::new((0.0, 10.0)).is_err());
        assert!(ZoomController::new((2.0, 1.0)).is_err());
        assert!(ZoomController::new((0.5, 10.0)).is_ok());
    }
}
