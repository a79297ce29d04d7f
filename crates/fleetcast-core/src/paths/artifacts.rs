//! Artifact file resolution for the inference pipeline.
//!
//! Seven serialized model/data files, all probed against the artifacts
//! candidate list. This module only locates them; it never validates their
//! contents or opens them.

use serde::Serialize;

use super::candidates::CandidateList;
use super::locate::{ResolvedPath, resolve_file};

/// Per-vehicle feature table consumed by the feature builder.
pub const FEAT_DF_FILENAME: &str = "feat_df_all_vehicles.csv";
/// Feature configuration for the f1 model family.
pub const FEATURES_CFG_FILENAME: &str = "features_f1.json";
/// Trained sequence-to-sequence model.
pub const SEQ2SEQ_MODEL_FILENAME: &str = "seq2seq1_f1.keras";
/// Gaussian-process residual correction model.
pub const GPR_RESIDUAL_FILENAME: &str = "gpr_residual.pkl";
/// Capacity scaler.
pub const CA_SCALER_FILENAME: &str = "ca_scaler.pkl";
/// Feature scaler.
pub const F_SCALER_FILENAME: &str = "f_scaler.pkl";
/// Secondary input scaler.
pub const X2_SCALER_FILENAME: &str = "x2_scaler.pkl";

/// Resolved locations of every artifact the inference pipeline loads.
///
/// Each file is probed independently against the candidate list, so a
/// deployment where sibling layouts hold different files of the group still
/// resolves every one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactPaths {
    /// Feature table (`feat_df_all_vehicles.csv`).
    pub feat_df_csv: ResolvedPath,
    /// Feature configuration (`features_f1.json`).
    pub features_cfg_json: ResolvedPath,
    /// Sequence model (`seq2seq1_f1.keras`).
    pub seq2seq_model: ResolvedPath,
    /// Residual model (`gpr_residual.pkl`).
    pub gpr_residual_pkl: ResolvedPath,
    /// Capacity scaler (`ca_scaler.pkl`).
    pub ca_scaler_pkl: ResolvedPath,
    /// Feature scaler (`f_scaler.pkl`).
    pub f_scaler_pkl: ResolvedPath,
    /// Secondary input scaler (`x2_scaler.pkl`).
    pub x2_scaler_pkl: ResolvedPath,
}

impl ArtifactPaths {
    /// Resolve all artifact files against `candidates`.
    ///
    /// Per-file environment overrides (`FEAT_DF_CSV`, `SEQ2SEQ_MODEL`, ...)
    /// take precedence over filesystem discovery.
    #[must_use]
    pub fn resolve(candidates: &CandidateList) -> Self {
        Self {
            feat_df_csv: resolve_file("FEAT_DF_CSV", FEAT_DF_FILENAME, candidates),
            features_cfg_json: resolve_file("FEATURES_CFG_JSON", FEATURES_CFG_FILENAME, candidates),
            seq2seq_model: resolve_file("SEQ2SEQ_MODEL", SEQ2SEQ_MODEL_FILENAME, candidates),
            gpr_residual_pkl: resolve_file("GPR_RESIDUAL_PKL", GPR_RESIDUAL_FILENAME, candidates),
            ca_scaler_pkl: resolve_file("CA_SCALER_PKL", CA_SCALER_FILENAME, candidates),
            f_scaler_pkl: resolve_file("F_SCALER_PKL", F_SCALER_FILENAME, candidates),
            x2_scaler_pkl: resolve_file("X2_SCALER_PKL", X2_SCALER_FILENAME, candidates),
        }
    }

    /// Iterate `(label, resolved)` pairs in a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &ResolvedPath)> {
        [
            ("feat_df_csv", &self.feat_df_csv),
            ("features_cfg_json", &self.features_cfg_json),
            ("seq2seq_model", &self.seq2seq_model),
            ("gpr_residual_pkl", &self.gpr_residual_pkl),
            ("ca_scaler_pkl", &self.ca_scaler_pkl),
            ("f_scaler_pkl", &self.f_scaler_pkl),
            ("x2_scaler_pkl", &self.x2_scaler_pkl),
        ]
        .into_iter()
    }

    /// Artifacts whose resolved path does not currently exist on disk.
    ///
    /// Used by diagnostics; an artifact resolved via env override can be
    /// "missing" here because overrides are never existence-checked.
    #[must_use]
    pub fn missing(&self) -> Vec<(&'static str, &ResolvedPath)> {
        self.iter()
            .filter(|(_, resolved)| !resolved.exists())
            .collect()
    }
}
