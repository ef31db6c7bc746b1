/// Camera uniform buffer data for GPU
///
/// Laid out for a std140 uniform block:
/// `mat4 u_inverseViewProjectionMatrix; vec3 u_cameraPos; float u_time; vec2 u_resolution; float u_aspect;`
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub inverse_view_projection: [[f32; 4]; 4], // Column-major
    pub camera_position: [f32; 3],
    pub time: f32, // Seconds since start
    pub resolution: [f32; 2],
    pub aspect: f32,
    pub _pad: f32,
}

/// Viewport size in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn resolution(&self) -> [f32; 2] {
        [self.width as f32, self.height as f32]
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024, 768)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_size_is_std140_friendly() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), 96);
        assert_eq!(std::mem::size_of::<CameraUniform>() % 16, 0);
    }

    #[test]
    fn test_uniform_bytes() {
        let uniform = CameraUniform {
            inverse_view_projection: [[0.0; 4]; 4],
            camera_position: [1.0, 2.0, 3.0],
            time: 0.5,
            resolution: [640.0, 480.0],
            aspect: 640.0 / 480.0,
            _pad: 0.0,
        };
        let bytes = bytemuck::bytes_of(&uniform);
        assert_eq!(bytes.len(), 96);
        // camera_position starts right after the matrix
        assert_eq!(&bytes[64..68], &1.0f32.to_ne_bytes());
    }

    #[test]
    fn test_viewport_aspect_ratio() {
        let viewport = Viewport::new(1920, 1080);
        assert!((viewport.aspect_ratio() - 16.0 / 9.0).abs() < 1e-6);
        assert_eq!(viewport.resolution(), [1920.0, 1080.0]);
    }

    #[test]
    fn test_viewport_default() {
        let viewport = Viewport::default();
        assert_eq!(viewport, Viewport::new(1024, 768));
    }
}
