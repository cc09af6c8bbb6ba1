use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use crate::error::{DomainError, Result};
use crate::math::Point3;
use crate::mesh::{CavityMesh, ZRange};

use super::{fill_color, FillFrame, FillParams, FillStyle, Jitter, Rgb};

/// Produces the frames of a bottom-up fill animation.
#[derive(Debug, Clone, Copy)]
pub struct FillAnimator {
    params: FillParams,
}

impl FillAnimator {
    /// Creates an animator with `step_count` steps and default settings.
    #[must_use]
    pub fn new(step_count: usize) -> Self {
        Self::from_params(FillParams {
            step_count,
            ..FillParams::default()
        })
    }

    /// Creates an animator from explicit settings.
    #[must_use]
    pub fn from_params(params: FillParams) -> Self {
        Self { params }
    }

    /// Sets the vertex displacement style.
    #[must_use]
    pub fn with_style(mut self, style: FillStyle) -> Self {
        self.params.style = style;
        self
    }

    /// Enables or disables per-vertex colors.
    #[must_use]
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.params.colors = colors;
        self
    }

    /// Enables seeded cosmetic jitter.
    #[must_use]
    pub fn with_jitter(mut self, jitter: Jitter) -> Self {
        self.params.jitter = Some(jitter);
        self
    }

    /// Returns the current settings.
    #[must_use]
    pub fn params(&self) -> &FillParams {
        &self.params
    }

    /// Prepares the `step_count + 1` frames for `mesh`.
    ///
    /// Frames are rendered lazily as the returned iterator advances. Cloning
    /// the iterator restarts the sequence from wherever the clone was taken.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidStepCount`] if `step_count < 1` or the
    /// frame count would overflow,
    /// [`DomainError::EmptyMesh`] if the mesh has no vertices or no faces, and
    /// [`DomainError::InvalidJitter`] if the jitter amplitude is outside
    /// `[0, 1)`.
    pub fn generate_frames<'m>(&self, mesh: &'m CavityMesh) -> Result<FillFrames<'m>> {
        let step_count = self.params.step_count;
        if step_count < 1 {
            return Err(DomainError::InvalidStepCount(step_count).into());
        }
        if mesh.vertex_count() == 0 || mesh.face_count() == 0 {
            return Err(DomainError::EmptyMesh {
                vertices: mesh.vertex_count(),
                faces: mesh.face_count(),
            }
            .into());
        }

        let factors = self
            .params
            .jitter
            .map(|jitter| jitter_factors(jitter, mesh.vertex_count()))
            .transpose()?;
        let range = mesh.z_range()?;

        debug!(
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            step_count,
            z_min = range.min,
            z_max = range.max,
            style = ?self.params.style,
            jitter = factors.is_some(),
            "prepared fill animation"
        );

        let end = step_count
            .checked_add(1)
            .ok_or(DomainError::InvalidStepCount(step_count))?;

        Ok(FillFrames {
            mesh,
            params: self.params,
            range,
            factors,
            next: 0,
            end,
        })
    }

    /// Renders every frame eagerly.
    ///
    /// # Errors
    ///
    /// See [`FillAnimator::generate_frames`].
    pub fn collect_frames(&self, mesh: &CavityMesh) -> Result<Vec<FillFrame>> {
        Ok(self.generate_frames(mesh)?.collect())
    }

    /// Renders every frame eagerly, one rayon task per step.
    ///
    /// Output is identical to [`FillAnimator::collect_frames`].
    ///
    /// # Errors
    ///
    /// See [`FillAnimator::generate_frames`].
    #[cfg(feature = "parallel")]
    pub fn collect_frames_parallel(&self, mesh: &CavityMesh) -> Result<Vec<FillFrame>> {
        use rayon::prelude::*;

        let frames = self.generate_frames(mesh)?;
        Ok((0..frames.end)
            .into_par_iter()
            .map(|step| frames.render(step))
            .collect())
    }
}

fn jitter_factors(jitter: Jitter, count: usize) -> Result<Vec<f64>> {
    let amplitude = jitter.amplitude;
    if !(amplitude.is_finite() && (0.0..1.0).contains(&amplitude)) {
        return Err(DomainError::InvalidJitter(amplitude).into());
    }
    let mut rng = StdRng::seed_from_u64(jitter.seed);
    Ok((0..count)
        .map(|_| rng.gen_range(1.0 - amplitude..=1.0 + amplitude))
        .collect())
}

/// Lazy, restartable sequence of fill frames for one mesh.
#[derive(Debug, Clone)]
pub struct FillFrames<'m> {
    mesh: &'m CavityMesh,
    params: FillParams,
    range: ZRange,
    factors: Option<Vec<f64>>,
    next: usize,
    end: usize,
}

impl FillFrames<'_> {
    /// Number of steps; the sequence has `step_count + 1` frames.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.end - 1
    }

    /// Vertical extent of the mesh being filled.
    #[must_use]
    pub fn z_range(&self) -> ZRange {
        self.range
    }

    /// Renders the frame for `step`, independent of the iterator position.
    ///
    /// Returns `None` if `step > step_count`.
    #[must_use]
    pub fn frame(&self, step: usize) -> Option<FillFrame> {
        (step < self.end).then(|| self.render(step))
    }

    #[allow(clippy::cast_precision_loss)]
    fn render(&self, step: usize) -> FillFrame {
        let progress = step as f64 / self.step_count() as f64;
        let z_min = self.range.min;
        let span = self.range.span();
        let fill_height = self.line_at(progress);
        let flat = span == 0.0;

        let vertices: Vec<Point3> = self
            .mesh
            .vertices()
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let local_progress = match &self.factors {
                    Some(factors) => (progress * factors[i]).clamp(0.0, 1.0),
                    None => progress,
                };
                let line = self.line_at(local_progress);
                let z = match self.params.style {
                    FillStyle::Clamp => v.z.min(line),
                    FillStyle::Shrink if v.z > line => line + (v.z - line) * local_progress,
                    FillStyle::Shrink => v.z,
                };
                Point3::new(v.x, v.y, z)
            })
            .collect();

        let colors: Option<Vec<Rgb>> = self.params.colors.then(|| {
            vertices
                .iter()
                .map(|v| {
                    // A flat mesh has no height to normalize against.
                    let fraction = if flat {
                        progress
                    } else {
                        ((v.z - z_min) / span).clamp(0.0, 1.0)
                    };
                    fill_color(fraction)
                })
                .collect()
        });

        trace!(step, progress, fill_height, "rendered fill frame");

        FillFrame {
            step,
            progress,
            fill_height,
            vertices,
            colors,
        }
    }
}

impl FillFrames<'_> {
    /// Fill line height at `progress`, exactly `z_min` at 0 and `z_max` at 1.
    fn line_at(&self, progress: f64) -> f64 {
        self.range.min * (1.0 - progress) + self.range.max * progress
    }
}

impl Iterator for FillFrames<'_> {
    type Item = FillFrame;

    fn next(&mut self) -> Option<FillFrame> {
        if self.next >= self.end {
            return None;
        }
        let frame = self.render(self.next);
        self.next += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FillFrames<'_> {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::FoamError;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    /// Square pyramid: base at z = 0, apex at z = 4.
    fn pyramid() -> CavityMesh {
        CavityMesh::new(
            vec![
                p(0.0, 0.0, 0.0),
                p(2.0, 0.0, 0.0),
                p(2.0, 2.0, 0.0),
                p(0.0, 2.0, 0.0),
                p(1.0, 1.0, 4.0),
                p(1.0, 0.0, 1.0),
            ],
            vec![[0, 1, 4], [1, 2, 4], [2, 3, 4], [3, 0, 4], [0, 2, 1], [0, 3, 2]],
        )
        .unwrap()
    }

    fn flat_square() -> CavityMesh {
        CavityMesh::new(
            vec![p(0.0, 0.0, 3.0), p(1.0, 0.0, 3.0), p(1.0, 1.0, 3.0), p(0.0, 1.0, 3.0)],
            vec![[0, 1, 2], [0, 2, 3]],
        )
        .unwrap()
    }

    #[test]
    fn produces_step_count_plus_one_frames() {
        let mesh = pyramid();
        let frames = FillAnimator::new(5).generate_frames(&mesh).unwrap();
        assert_eq!(frames.len(), 6);
        let steps: Vec<usize> = frames.map(|f| f.step).collect();
        assert_eq!(steps, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn first_frame_clamps_to_floor() {
        let mesh = pyramid();
        let first = FillAnimator::new(4).generate_frames(&mesh).unwrap().next().unwrap();
        assert_eq!(first.fill_height, 0.0);
        for (out, orig) in first.vertices.iter().zip(mesh.vertices()) {
            assert_eq!(out.z, 0.0);
            assert_eq!((out.x, out.y), (orig.x, orig.y));
        }
    }

    #[test]
    fn last_frame_is_original_mesh() {
        let mesh = pyramid();
        let last = FillAnimator::new(7).generate_frames(&mesh).unwrap().last().unwrap();
        assert_eq!(last.step, 7);
        assert_eq!(last.fill_height, 4.0);
        assert_eq!(last.vertices, mesh.vertices());
    }

    #[test]
    fn intermediate_frame_clamps_only_above_line() {
        let mesh = pyramid();
        let frame = FillAnimator::new(4)
            .generate_frames(&mesh)
            .unwrap()
            .frame(2)
            .unwrap();
        assert_relative_eq!(frame.progress, 0.5);
        assert_relative_eq!(frame.fill_height, 2.0);
        assert_eq!(frame.vertices[4], p(1.0, 1.0, 2.0));
        assert_eq!(frame.vertices[5], p(1.0, 0.0, 1.0));
        assert_eq!(frame.vertices[0], p(0.0, 0.0, 0.0));
    }

    #[test]
    fn colors_follow_fill_fraction() {
        let mesh = pyramid();
        let frame = FillAnimator::new(4)
            .generate_frames(&mesh)
            .unwrap()
            .frame(2)
            .unwrap();
        let colors = frame.colors.unwrap();
        assert_eq!(colors.len(), mesh.vertex_count());
        assert_eq!(colors[0], Rgb::RED);
        assert_eq!(colors[4], fill_color(0.5));
        assert_eq!(colors[5], fill_color(0.25));
    }

    #[test]
    fn colors_can_be_disabled() {
        let mesh = pyramid();
        let frames = FillAnimator::new(2)
            .with_colors(false)
            .collect_frames(&mesh)
            .unwrap();
        assert!(frames.iter().all(|f| f.colors.is_none()));
    }

    #[test]
    fn flat_mesh_is_unchanged_in_every_frame() {
        let mesh = flat_square();
        let frames = FillAnimator::new(3).collect_frames(&mesh).unwrap();
        assert_eq!(frames.len(), 4);
        for frame in &frames {
            assert_eq!(frame.vertices, mesh.vertices());
            let expected = fill_color(frame.progress);
            assert!(frame.colors.as_ref().unwrap().iter().all(|c| *c == expected));
        }
    }

    #[test]
    fn sequence_is_restartable_and_deterministic() {
        let mesh = pyramid();
        let frames = FillAnimator::new(6).generate_frames(&mesh).unwrap();
        let first: Vec<FillFrame> = frames.clone().collect();
        let second: Vec<FillFrame> = frames.collect();
        assert_eq!(first, second);
        assert_eq!(first, FillAnimator::new(6).collect_frames(&mesh).unwrap());
    }

    #[test]
    fn caller_mesh_is_not_modified() {
        let mesh = pyramid();
        let before = mesh.clone();
        let _ = FillAnimator::new(3).collect_frames(&mesh).unwrap();
        assert_eq!(mesh, before);
    }

    #[test]
    fn rejects_zero_steps() {
        let mesh = pyramid();
        let err = FillAnimator::new(0).generate_frames(&mesh).unwrap_err();
        assert!(matches!(err, FoamError::Domain(DomainError::InvalidStepCount(0))));
    }

    #[test]
    fn rejects_step_count_without_room_for_last_frame() {
        let mesh = pyramid();
        let err = FillAnimator::new(usize::MAX)
            .generate_frames(&mesh)
            .unwrap_err();
        assert!(matches!(
            err,
            FoamError::Domain(DomainError::InvalidStepCount(usize::MAX))
        ));
    }

    #[test]
    fn fractional_heights_reach_exact_extremes() {
        let mesh = CavityMesh::new(
            vec![p(0.0, 0.0, -1.2), p(1.0, 0.0, -1.2), p(0.5, 1.0, 3.9)],
            vec![[0, 1, 2]],
        )
        .unwrap();

        for style in [FillStyle::Clamp, FillStyle::Shrink] {
            let mut frames = FillAnimator::new(5)
                .with_style(style)
                .collect_frames(&mesh)
                .unwrap();

            let last = frames.pop().unwrap();
            assert_eq!(last.fill_height, 3.9);
            assert_eq!(last.vertices, mesh.vertices());
            assert_eq!(last.colors.unwrap()[2], Rgb::GREEN);

            let first = &frames[0];
            assert_eq!(first.fill_height, -1.2);
            assert!(first.vertices.iter().all(|v| v.z == -1.2));
        }
    }

    #[test]
    fn nearly_flat_mesh_uses_height_colors() {
        let mesh = CavityMesh::new(
            vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(0.0, 1.0, 1e-12)],
            vec![[0, 1, 2]],
        )
        .unwrap();
        let last = FillAnimator::new(2)
            .collect_frames(&mesh)
            .unwrap()
            .pop()
            .unwrap();
        let colors = last.colors.unwrap();
        assert_eq!(colors[0], Rgb::RED);
        assert_eq!(colors[2], Rgb::GREEN);
    }

    #[test]
    fn rejects_empty_meshes() {
        let no_vertices = CavityMesh::default();
        assert!(matches!(
            FillAnimator::new(2).generate_frames(&no_vertices),
            Err(FoamError::Domain(DomainError::EmptyMesh { vertices: 0, .. }))
        ));

        let no_faces = CavityMesh::new(vec![p(0.0, 0.0, 0.0)], vec![]).unwrap();
        assert!(matches!(
            FillAnimator::new(2).generate_frames(&no_faces),
            Err(FoamError::Domain(DomainError::EmptyMesh { faces: 0, .. }))
        ));
    }

    #[test]
    fn shrink_style_endpoints_match_clamp() {
        let mesh = pyramid();
        let frames = FillAnimator::new(4)
            .with_style(FillStyle::Shrink)
            .collect_frames(&mesh)
            .unwrap();
        assert!(frames[0].vertices.iter().all(|v| v.z == 0.0));
        assert_eq!(frames[4].vertices, mesh.vertices());

        // Apex at progress 0.5: line 2.0, offset 2.0 halved.
        assert_relative_eq!(frames[2].vertices[4].z, 3.0);
        assert_relative_eq!(frames[2].vertices[5].z, 1.0);
    }

    #[test]
    fn jitter_is_seeded() {
        let mesh = pyramid();
        let animator = FillAnimator::new(5).with_jitter(Jitter::new(42, 0.2));
        let a = animator.collect_frames(&mesh).unwrap();
        let b = animator.collect_frames(&mesh).unwrap();
        assert_eq!(a, b);

        let plain = FillAnimator::new(5).collect_frames(&mesh).unwrap();
        assert_ne!(a, plain);
        for frame in &a {
            for (out, orig) in frame.vertices.iter().zip(mesh.vertices()) {
                assert!(out.z <= orig.z);
                assert!(out.z >= 0.0);
            }
        }
    }

    #[test]
    fn zero_amplitude_jitter_matches_plain() {
        let mesh = pyramid();
        let jittered = FillAnimator::new(3)
            .with_jitter(Jitter::new(7, 0.0))
            .collect_frames(&mesh)
            .unwrap();
        assert_eq!(jittered, FillAnimator::new(3).collect_frames(&mesh).unwrap());
    }

    #[test]
    fn rejects_out_of_range_jitter() {
        let mesh = pyramid();
        for amplitude in [-0.1, 1.0, f64::NAN] {
            let result = FillAnimator::new(3)
                .with_jitter(Jitter::new(1, amplitude))
                .generate_frames(&mesh);
            assert!(matches!(
                result,
                Err(FoamError::Domain(DomainError::InvalidJitter(_)))
            ));
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_matches_sequential() {
        let mesh = pyramid();
        let animator = FillAnimator::new(9).with_jitter(Jitter::new(3, 0.1));
        assert_eq!(
            animator.collect_frames_parallel(&mesh).unwrap(),
            animator.collect_frames(&mesh).unwrap()
        );
    }
}
