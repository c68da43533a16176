use serde::{Deserialize, Serialize};

/// Flat bag of tuning parameters for the whole detection pipeline.
///
/// The field names are a stable surface: configs are serialised to JSON for
/// threshold tuning and must round-trip across versions. A detector instance
/// copies its `Config` at construction time and never mutates it; each
/// implementation validates the subset it consumes.
///
/// Fields governing neighbouring pipeline phases (strip extraction,
/// clustering, cross-frame matching) are carried here as documented input
/// even though only some of them are consumed by the selection engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Registry name of the algorithm to construct.
    pub name: String,

    /// Intersection-over-union threshold used by evaluation.
    pub iou_threshold: f32,
    /// Maximum horizontal gap between linked strips, as a fraction of frame
    /// width.
    pub max_gap_x: f32,
    /// Minimum vertical gap between strips, as a fraction of frame height.
    pub min_gap_y: f32,
    /// Cap on the processing resolution; taller inputs are downscaled.
    pub max_image_height: i32,
    /// Minimum strip height in pixels at processing resolution.
    pub min_strip_height: i32,
    /// Minimum number of strips for a candidate to count as an object.
    pub min_strips_in_object: i32,
    /// Minimum fraction of a strip's block that must be difference pixels.
    pub min_strip_area: f32,

    // Aspect and distance limits applied before cross-frame matching.
    pub min_aspect: f32,
    pub min_aspect_for_relevant_angle: f32,
    pub min_dist_to_t_minus_2: f32,

    // Cross-frame matching bounds and score weights.
    pub match_aspect_max: f32,
    pub match_area_max: f32,
    pub match_distance_min: f32,
    pub match_distance_max: f32,
    pub match_angle_max: f32,
    pub match_aspect_weight: f32,
    pub match_area_weight: f32,
    pub match_distance_weight: f32,
    pub match_angle_weight: f32,

    /// Maximum distance when selecting among matched candidates.
    pub select_max_distance: f32,

    // Output shaping.
    /// Multiplicative correction applied to the reported radius.
    pub output_radius_corr: f32,
    /// Floor for the reported radius, in pixels.
    pub output_radius_min: f32,
    /// Multiplicative correction applied to rasterised output points.
    pub output_raster_corr: f32,
    /// Disable the robust radius estimate and report the raw average.
    pub output_no_robust_radius: bool,

    /// Nominal input image height the defaults were tuned for.
    pub image_height: i32,

    // Component and cluster formation thresholds.
    pub min_strips_in_component: i32,
    pub min_strips_in_cluster: i32,
    pub min_cluster_length: f32,
    pub height_ratio_weight: f32,
    pub distance_weight: f32,
    pub gaps_weight: f32,
    pub max_height_ratio_strips: f32,
    pub max_height_ratio_internal: f32,
    pub max_height_ratio_external: f32,
    pub max_distance: f32,
    pub max_gaps_length: f32,

    /// Lower bound on per-slice displacement, as a fraction of the
    /// candidate's full horizontal span. Consumed by the selection engine.
    pub min_motion: f32,
    /// Upper bound on per-slice displacement, as a fraction of the
    /// candidate's full horizontal span. Consumed by the selection engine.
    pub max_motion: f32,

    /// Emit point sets at source resolution instead of processing
    /// resolution.
    pub point_set_source_resolution: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "strip-cluster-v1".to_string(),
            iou_threshold: 0.5,
            max_gap_x: 0.020,
            min_gap_y: 0.046,
            max_image_height: 300,
            min_strip_height: 2,
            min_strips_in_object: 4,
            min_strip_area: 0.43,
            min_aspect: 1.0,
            min_aspect_for_relevant_angle: 1.62,
            min_dist_to_t_minus_2: 1.9,
            match_aspect_max: 1.57,
            match_area_max: 2.15,
            match_distance_min: 0.55,
            match_distance_max: 5.0,
            match_angle_max: 0.37,
            match_aspect_weight: 1.00,
            match_area_weight: 1.35,
            match_distance_weight: 0.25,
            match_angle_weight: 5.00,
            select_max_distance: 0.60,
            output_radius_corr: 1.0,
            output_radius_min: 2.0,
            output_raster_corr: 1.0,
            output_no_robust_radius: false,
            image_height: 480,
            min_strips_in_component: 2,
            min_strips_in_cluster: 12,
            min_cluster_length: 2.0,
            height_ratio_weight: 1.0,
            distance_weight: 0.0,
            gaps_weight: 1.0,
            max_height_ratio_strips: 1.75001,
            max_height_ratio_internal: 1.75001,
            max_height_ratio_external: 1.99999,
            max_distance: 20.0,
            max_gaps_length: 0.75,
            min_motion: 0.25,
            max_motion: 0.50,
            point_set_source_resolution: false,
        }
    }
}
