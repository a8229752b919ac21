use crate::core::error::{rgba_len, HostError, HostResult};

/// Something the host can copy a full RGBA frame onto.
pub trait DisplaySurface {
    fn size(&self) -> (u32, u32);

    /// Replace the whole surface. `rgba` must be exactly `w * h * 4` bytes.
    fn present(&mut self, rgba: &[u8]) -> HostResult<()>;
}

pub(crate) fn check_frame_len(size: (u32, u32), rgba: &[u8]) -> HostResult<()> {
    let expected = rgba_len(size.0, size.1);
    if rgba.len() != expected {
        return Err(HostError::SurfaceSize { expected, actual: rgba.len() });
    }
    Ok(())
}

/// Headless surface backed by a byte vector.
#[derive(Clone, Debug)]
pub struct MemorySurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    presents: u64,
}

impl MemorySurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; rgba_len(width, height)],
            presents: 0,
        }
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Number of frames presented so far
    pub fn presents(&self) -> u64 {
        self.presents
    }
}

impl DisplaySurface for MemorySurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn present(&mut self, rgba: &[u8]) -> HostResult<()> {
        check_frame_len(self.size(), rgba)?;
        self.pixels.copy_from_slice(rgba);
        self.presents += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_replaces_contents() {
        let mut surface = MemorySurface::new(2, 1);
        surface.present(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(surface.pixels(), &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(surface.presents(), 1);
    }

    #[test]
    fn wrong_length_is_rejected_and_surface_kept() {
        let mut surface = MemorySurface::new(2, 2);
        let err = surface.present(&[255; 12]).unwrap_err();
        assert!(matches!(err, HostError::SurfaceSize { expected: 16, actual: 12 }));
        assert!(surface.pixels().iter().all(|&b| b == 0));
        assert_eq!(surface.presents(), 0);
    }
}
