//! Map projections from geographic positions to screen space

use boundance_core::Position;
use nalgebra::{Point2, Vector2};

/// Maps geographic positions to 2D screen coordinates (y grows downwards)
pub trait Projection {
    fn project(&self, position: &Position) -> Point2<f64>;
}

/// Albers equal-area conic projection.
///
/// [`AlbersProjection::default`] is framed on the contiguous United States
/// for a 960×500 viewport.
#[derive(Debug, Clone)]
pub struct AlbersProjection {
    /// Standard parallels in degrees
    pub parallels: (f64, f64),
    /// Longitude added before projecting, in degrees
    pub rotation: f64,
    /// Position, in rotated coordinates, that lands on `translate`
    pub center: (f64, f64),
    pub scale: f64,
    pub translate: Vector2<f64>,
    n: f64,
    c: f64,
    r0: f64,
    offset: Vector2<f64>,
}

impl AlbersProjection {
    /// Create a projection, with angles in degrees
    pub fn new(
        parallels: (f64, f64),
        rotation: f64,
        center: (f64, f64),
        scale: f64,
        translate: Vector2<f64>,
    ) -> Self {
        let sy0 = parallels.0.to_radians().sin();
        let n = (sy0 + parallels.1.to_radians().sin()) / 2.0;
        let c = 1.0 + sy0 * (2.0 * n - sy0);
        let r0 = c.sqrt() / n;

        let mut projection = Self {
            parallels,
            rotation,
            center,
            scale,
            translate,
            n,
            c,
            r0,
            offset: Vector2::zeros(),
        };
        let centered = projection.raw(center.0.to_radians(), center.1.to_radians());
        projection.offset = Vector2::new(
            translate.x - scale * centered.x,
            translate.y + scale * centered.y,
        );
        projection
    }

    /// Unscaled conic coordinates for radians, y pointing north
    fn raw(&self, lambda: f64, phi: f64) -> Vector2<f64> {
        let r = (self.c - 2.0 * self.n * phi.sin()).max(0.0).sqrt() / self.n;
        let theta = lambda * self.n;
        Vector2::new(r * theta.sin(), self.r0 - r * theta.cos())
    }

    /// Rotate a longitude in radians into [-π, π]
    fn rotate(&self, lambda: f64) -> f64 {
        let rotated = lambda + self.rotation.to_radians();
        let pi = std::f64::consts::PI;
        if rotated > pi {
            rotated - 2.0 * pi
        } else if rotated < -pi {
            rotated + 2.0 * pi
        } else {
            rotated
        }
    }
}

impl Default for AlbersProjection {
    fn default() -> Self {
        Self::new((29.5, 45.5), 96.0, (-0.6, 38.7), 1070.0, Vector2::new(480.0, 250.0))
    }
}

impl Projection for AlbersProjection {
    fn project(&self, position: &Position) -> Point2<f64> {
        let lambda = self.rotate(position.lon.to_radians());
        let raw = self.raw(lambda, position.lat.to_radians());
        Point2::new(self.offset.x + self.scale * raw.x, self.offset.y - self.scale * raw.y)
    }
}

/// Plate carrée: longitude and latitude scaled straight onto the screen
#[derive(Debug, Clone)]
pub struct Equirectangular {
    pub scale: f64,
    pub translate: Vector2<f64>,
}

impl Default for Equirectangular {
    fn default() -> Self {
        Self { scale: 960.0 / 360.0, translate: Vector2::new(480.0, 250.0) }
    }
}

impl Projection for Equirectangular {
    fn project(&self, position: &Position) -> Point2<f64> {
        Point2::new(
            self.translate.x + self.scale * position.lon,
            self.translate.y - self.scale * position.lat,
        )
    }
}
