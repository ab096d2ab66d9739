//! Scene assembly and the render loop.

use crate::hittable::Object;
use crate::tracer::{RayTracer, Scene};
use crate::{Camera, Color, ColorBuffer, RenderError, RenderResult, Sampler, Sky};
use std::sync::Arc;
use std::time::Instant;

/// Composition root: objects, sky, camera, sampler and ray tracer.
///
/// Rendering writes the averaged samples into the camera's pixel buffer.
#[derive(Default)]
pub struct World {
    objects: Vec<Box<dyn Object>>,
    sky: Option<Box<dyn Sky>>,
    camera: Option<Box<dyn Camera>>,
    sampler: Option<Arc<Sampler>>,
    tracer: Option<Box<dyn RayTracer>>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_object(&mut self, object: impl Object + 'static) -> &mut Self {
        self.objects.push(Box::new(object));
        self
    }

    pub fn set_sky(&mut self, sky: impl Sky + 'static) -> &mut Self {
        self.sky = Some(Box::new(sky));
        self
    }

    pub fn set_camera(&mut self, camera: impl Camera + 'static) -> &mut Self {
        self.camera = Some(Box::new(camera));
        self
    }

    pub fn set_sampler(&mut self, sampler: Arc<Sampler>) -> &mut Self {
        self.sampler = Some(sampler);
        self
    }

    pub fn set_ray_tracer(&mut self, tracer: impl RayTracer + 'static) -> &mut Self {
        self.tracer = Some(Box::new(tracer));
        self
    }

    pub fn objects(&self) -> &[Box<dyn Object>] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut Vec<Box<dyn Object>> {
        &mut self.objects
    }

    pub fn sky(&self) -> Option<&dyn Sky> {
        self.sky.as_deref()
    }

    pub fn camera(&self) -> Option<&dyn Camera> {
        self.camera.as_deref()
    }

    pub fn camera_mut(&mut self) -> Option<&mut (dyn Camera + 'static)> {
        self.camera.as_deref_mut()
    }

    pub fn sampler(&self) -> Option<&Arc<Sampler>> {
        self.sampler.as_ref()
    }

    pub fn ray_tracer(&self) -> Option<&dyn RayTracer> {
        self.tracer.as_deref()
    }

    /// The camera's pixel buffer, if a camera is set.
    pub fn image(&self) -> Option<&ColorBuffer> {
        self.camera().map(|camera| camera.plane().buffer())
    }

    /// Check everything a render needs, reporting the first problem found.
    pub fn validate(&self) -> RenderResult<()> {
        if let Some(index) = self.objects.iter().position(|o| o.brdf().is_none()) {
            return Err(RenderError::MissingBrdf(index));
        }
        self.camera
            .as_deref()
            .ok_or(RenderError::MissingCamera)?
            .validate()?;
        if self.sky.is_none() {
            return Err(RenderError::MissingSky);
        }
        if self.sampler.is_none() {
            return Err(RenderError::MissingSampler);
        }
        if self.tracer.is_none() {
            return Err(RenderError::MissingTracer);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Render every pixel of the camera's buffer.
    ///
    /// Each pixel averages `sampler.num_samples()` traced rays. Nothing is
    /// written if the world is invalid or any ray fails to trace.
    pub fn render(&mut self) -> RenderResult<()> {
        self.validate()?;

        let camera = self.camera.as_deref_mut().ok_or(RenderError::MissingCamera)?;
        let sky = self.sky.as_deref().ok_or(RenderError::MissingSky)?;
        let sampler = self.sampler.as_deref().ok_or(RenderError::MissingSampler)?;
        let tracer = self.tracer.as_deref().ok_or(RenderError::MissingTracer)?;
        let scene = Scene {
            objects: &self.objects,
            sky,
            sampler,
        };

        let size = camera.plane().size();
        let num_samples = sampler.num_samples();
        log::info!(
            "Rendering {}x{} with {} objects, {} samples per pixel, {} steps",
            size.x,
            size.y,
            scene.objects.len(),
            num_samples,
            tracer.max_steps()
        );
        let start = Instant::now();

        let mut image = ColorBuffer::new(size.x, size.y);
        let inv_samples = 1.0 / num_samples as f32;
        for y in 0..size.y {
            for x in 0..size.x {
                let mut pixel_color = Color::ZERO;
                for _ in 0..num_samples {
                    let ray = camera.ray(x, y, sampler.next_sample());
                    pixel_color += tracer.trace_ray(&scene, &ray)?;
                }
                image[(x, y)] = pixel_color * inv_samples;
            }
        }

        *camera.plane_mut().buffer_mut() = image;
        log::info!("Render finished in {:.2?}", start.elapsed());
        Ok(())
    }
}
