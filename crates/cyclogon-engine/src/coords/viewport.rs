/// Drawable size in physical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

impl From<winit::dpi::PhysicalSize<u32>> for Viewport {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::new(size.width as f32, size.height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_viewport_is_invalid() {
        assert!(!Viewport::new(0.0, 900.0).is_valid());
        assert!(!Viewport::new(1000.0, f32::NAN).is_valid());
    }

    #[test]
    fn from_physical_size() {
        let vp = Viewport::from(winit::dpi::PhysicalSize::new(1000u32, 900u32));
        assert_eq!(vp, Viewport::new(1000.0, 900.0));
        assert!(vp.is_valid());
    }
}
