use super::Mesh;
use super::roof::generate_roof;
use super::triangulation::{triangulate_ring, triangulate_with_holes};
use super::validation::validate_mesh;
use super::walls::generate_walls;
use crate::config::{MeshConfig, RingMode};
use crate::domain::{Building, Point2D, Ring};
use crate::error::{ConfigError, GeometryError};
use crate::geometry::{Bounds, Normalizer, RingGeometry};

/// Diagnostics gathered while generating one tile's mesh
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneStats {
    /// Raw tile-space extent of every ring of every building
    pub bounds: Option<Bounds>,
    /// Tallest extruded building, landmark placeholders excluded
    pub max_height: f64,
    pub buildings_total: usize,
    pub buildings_extruded: usize,
    pub buildings_without_height: usize,
    pub rings_extruded: usize,
    pub rings_skipped: usize,
}

impl SceneStats {
    fn visit(&mut self, p: Point2D) {
        match self.bounds.as_mut() {
            Some(bounds) => bounds.include(p),
            None => self.bounds = Some(Bounds::at(p)),
        }
    }
}

/// A ring left out of the mesh, and why
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRing {
    /// Index of the building in the input slice
    pub building: usize,
    /// Index of the ring within the building's footprint
    pub ring: usize,
    pub error: GeometryError,
}

/// Everything one pass hands to the renderer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TileMesh {
    pub mesh: Mesh,
    pub stats: SceneStats,
    pub skipped: Vec<SkippedRing>,
}

/// Turns a tile's buildings into one flat triangle list.
///
/// Buildings are processed in input order and each ring contributes its walls
/// followed by its roof, so identical input always yields identical bytes.
/// A bad ring is skipped and reported; it never aborts the pass.
#[derive(Debug, Clone)]
pub struct MeshAssembler {
    config: MeshConfig,
    normalizer: Normalizer,
}

impl MeshAssembler {
    pub fn new(config: MeshConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let normalizer = Normalizer::from_config(&config);
        Ok(Self { config, normalizer })
    }

    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    pub fn assemble(&self, buildings: &[Building]) -> TileMesh {
        let mut out = TileMesh::default();

        for (index, building) in buildings.iter().enumerate() {
            out.stats.buildings_total += 1;
            for p in building.points() {
                out.stats.visit(*p);
            }

            let height = match building.usable_height() {
                Ok(h) => h,
                Err(e) => {
                    log::debug!("Skipping building {}: {}", index, e);
                    out.stats.buildings_without_height += 1;
                    continue;
                }
            };

            if self.config.require_extrude_flag && !building.extrude {
                log::debug!("Skipping building {}: extrude flag not set", index);
                continue;
            }

            out.stats.buildings_extruded += 1;
            if height > out.stats.max_height && height != self.config.landmark_height {
                out.stats.max_height = height;
            }

            match self.config.ring_mode {
                RingMode::Independent => self.extrude_rings(index, building, height, &mut out),
                RingMode::Holes => self.extrude_with_holes(index, building, height, &mut out),
            }
        }

        let report = validate_mesh(&out.mesh);
        if report.has_issues() {
            log::debug!("{}", report.summary());
        }
        log::info!(
            "Extruded {} of {} buildings: {} triangles, {} rings skipped",
            out.stats.buildings_extruded,
            out.stats.buildings_total,
            out.mesh.triangle_count(),
            out.stats.rings_skipped
        );

        out
    }

    /// Every ring gets its own walls and roof
    fn extrude_rings(&self, index: usize, building: &Building, height: f64, out: &mut TileMesh) {
        for (ring_index, ring) in building.footprint.iter().enumerate() {
            let Some(geometry) = prepare_ring(index, ring_index, ring, out) else {
                continue;
            };

            self.walls(&geometry, height, building.min_height, &mut out.mesh);

            let indices = triangulate_ring(&geometry);
            generate_roof(
                &mut out.mesh,
                geometry.points(),
                &indices,
                geometry.signed_area(),
                &self.normalizer,
                height,
                self.config.roof_color,
            );
            out.stats.rings_extruded += 1;
        }
    }

    /// Rings wound against the first ring become holes of the preceding outer ring
    fn extrude_with_holes(
        &self,
        index: usize,
        building: &Building,
        height: f64,
        out: &mut TileMesh,
    ) {
        let mut groups: Vec<(RingGeometry, Vec<RingGeometry>)> = Vec::new();
        let mut outer_sign: Option<f64> = None;

        for (ring_index, ring) in building.footprint.iter().enumerate() {
            let Some(geometry) = prepare_ring(index, ring_index, ring, out) else {
                continue;
            };

            let area = geometry.signed_area();
            let is_hole = match (outer_sign, groups.last()) {
                (Some(sign), Some(_)) => area * sign < 0.0,
                _ => false,
            };

            if is_hole {
                if let Some((_, holes)) = groups.last_mut() {
                    holes.push(geometry);
                }
            } else {
                if outer_sign.is_none() && area != 0.0 {
                    outer_sign = Some(area.signum());
                }
                groups.push((geometry, Vec::new()));
            }
        }

        for (outer, holes) in &groups {
            self.walls(outer, height, building.min_height, &mut out.mesh);
            for hole in holes {
                self.walls(hole, height, building.min_height, &mut out.mesh);
            }

            let hole_refs: Vec<&RingGeometry> = holes.iter().collect();
            let indices = triangulate_with_holes(outer, &hole_refs);
            let points: Vec<Point2D> = outer
                .points()
                .iter()
                .chain(holes.iter().flat_map(|h| h.points()))
                .copied()
                .collect();

            generate_roof(
                &mut out.mesh,
                &points,
                &indices,
                outer.signed_area(),
                &self.normalizer,
                height,
                self.config.roof_color,
            );
            out.stats.rings_extruded += 1 + holes.len();
        }
    }

    fn walls(&self, ring: &RingGeometry, height: f64, min_height: f64, mesh: &mut Mesh) {
        generate_walls(
            mesh,
            ring,
            &self.normalizer,
            height,
            min_height,
            self.config.wall_color,
        );
    }
}

/// Adapt one ring, recording it as skipped when it is unusable
fn prepare_ring(
    building: usize,
    ring_index: usize,
    ring: &Ring,
    out: &mut TileMesh,
) -> Option<RingGeometry> {
    match RingGeometry::from_ring(ring) {
        Ok(geometry) => Some(geometry),
        Err(error) => {
            log::warn!(
                "Skipping ring {} of building {}: {}",
                ring_index,
                building,
                error
            );
            out.stats.rings_skipped += 1;
            out.skipped.push(SkippedRing {
                building,
                ring: ring_index,
                error,
            });
            None
        }
    }
}

/// Generate one tile's mesh with the given configuration
pub fn generate_tile_mesh(
    buildings: &[Building],
    config: &MeshConfig,
) -> Result<TileMesh, ConfigError> {
    Ok(MeshAssembler::new(config.clone())?.assemble(buildings))
}
