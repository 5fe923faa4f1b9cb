pub mod lineage;
pub mod normalizer;
