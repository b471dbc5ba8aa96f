use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    let first = formats.first().copied()?;

    if prefer_srgb {
        if let Some(f) = formats.iter().copied().find(|f| f.is_srgb()) {
            return Some(f);
        }
    }

    Some(first)
}

pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// Returns `true` when the surface can be configured at `size`.
///
/// wgpu rejects 0×0 surfaces, which is what a minimized window reports.
#[inline]
pub(crate) fn is_drawable(size: PhysicalSize<u32>) -> bool {
    size.width > 0 && size.height > 0
}

pub(crate) fn classify_surface_error(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode, SurfaceError, TextureFormat};

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn prefers_srgb_when_asked() {
        let formats = [TextureFormat::Bgra8Unorm, TextureFormat::Bgra8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(TextureFormat::Bgra8UnormSrgb));
        assert_eq!(choose_surface_format(&formats, false), Some(TextureFormat::Bgra8Unorm));
    }

    #[test]
    fn falls_back_to_first_format() {
        let formats = [TextureFormat::Rgba16Float];
        assert_eq!(choose_surface_format(&formats, true), Some(TextureFormat::Rgba16Float));
    }

    #[test]
    fn no_formats_means_unsupported_surface() {
        assert_eq!(choose_surface_format(&[], true), None);
    }

    // ── alpha ─────────────────────────────────────────────────────────────

    #[test]
    fn requested_alpha_mode_used_if_supported() {
        let supported = [CompositeAlphaMode::Opaque, CompositeAlphaMode::PreMultiplied];
        assert_eq!(
            choose_alpha_mode(&supported, Some(CompositeAlphaMode::PreMultiplied)),
            CompositeAlphaMode::PreMultiplied
        );
    }

    #[test]
    fn unsupported_alpha_mode_falls_back() {
        let supported = [CompositeAlphaMode::Inherit];
        assert_eq!(
            choose_alpha_mode(&supported, Some(CompositeAlphaMode::Opaque)),
            CompositeAlphaMode::Inherit
        );
        assert_eq!(choose_alpha_mode(&[], None), CompositeAlphaMode::Auto);
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn surface_errors_map_to_actions() {
        assert_eq!(classify_surface_error(&SurfaceError::Lost), SurfaceErrorAction::Reconfigured);
        assert_eq!(classify_surface_error(&SurfaceError::Outdated), SurfaceErrorAction::Reconfigured);
        assert_eq!(classify_surface_error(&SurfaceError::Timeout), SurfaceErrorAction::SkipFrame);
        assert_eq!(classify_surface_error(&SurfaceError::OutOfMemory), SurfaceErrorAction::Fatal);
    }

    #[test]
    fn minimized_window_is_not_drawable() {
        assert!(!is_drawable(PhysicalSize::new(0, 900)));
        assert!(is_drawable(PhysicalSize::new(1000, 900)));
    }
}
