use anyhow::{Context, Result};
use glam::Vec3;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::directional::DirectionalCamera;
use crate::error::CameraError;
use crate::orbit::{OrbitCamera, DEFAULT_MIN_ELEVATION};
use crate::traits::CameraRig;
use crate::types::Viewport;

/// Initial azimuth every orbit scene starts from unless it says otherwise
pub const DEFAULT_ORBIT_ANGLE: f32 = -0.3;

fn default_orbit_angle() -> f32 {
    DEFAULT_ORBIT_ANGLE
}

fn default_min_pitch() -> f32 {
    DEFAULT_MIN_ELEVATION
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitDescriptor {
    pub target: Vec3,
    pub fov: f32,
    pub pitch: f32,
    pub radius: f32,
    #[serde(default = "default_orbit_angle")]
    pub angle: f32,
    #[serde(default = "default_min_pitch")]
    pub min_pitch: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionalDescriptor {
    pub position: Vec3,
    pub target: Vec3,
    pub direction: Vec3,
    pub speed: f32,
    pub fov: f32,
}

/// How a scene's camera moves
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CameraDescriptor {
    Orbit(OrbitDescriptor),
    Directional(DirectionalDescriptor),
}

impl CameraDescriptor {
    /// Build the camera rig for a viewport
    pub fn build(&self, viewport: Viewport) -> Result<Box<dyn CameraRig>, CameraError> {
        match self {
            CameraDescriptor::Orbit(orbit) => {
                let mut camera = OrbitCamera::new(
                    orbit.target,
                    orbit.fov,
                    viewport,
                    orbit.pitch,
                    orbit.angle,
                    orbit.radius,
                );
                camera.set_min_elevation(Some(orbit.min_pitch));
                Ok(Box::new(camera))
            }
            CameraDescriptor::Directional(directional) => {
                let camera = DirectionalCamera::new(
                    directional.position,
                    directional.target,
                    directional.direction,
                    directional.speed,
                    directional.fov,
                    viewport.aspect_ratio(),
                )?;
                Ok(Box::new(camera))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDescriptor {
    pub name: String,
    pub shader_url: String,
    #[serde(default)]
    pub textures: Vec<String>,
    pub camera: CameraDescriptor,
}

/// Scene id -> scene descriptor, ordered by id
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneCatalog {
    scenes: BTreeMap<String, SceneDescriptor>,
}

impl SceneCatalog {
    pub fn from_json(json: &str) -> Result<Self> {
        let scenes: BTreeMap<String, SceneDescriptor> =
            serde_json::from_str(json).context("Failed to parse scene catalog")?;
        Ok(Self { scenes })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene catalog: {}", path.display()))?;
        let catalog = Self::from_json(&json)
            .with_context(|| format!("Invalid scene catalog: {}", path.display()))?;
        log::info!("Loaded {} scenes from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&SceneDescriptor> {
        self.scenes.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.scenes.keys().map(String::as_str)
    }

    pub fn default_scene_id(&self) -> Option<&str> {
        self.ids().next()
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}
