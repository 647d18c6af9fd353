// Registry ID remapping
//
// Rewrites the K strings of FML.Registries entries in a Forge world save:
//   1. locate root.FML.Registries (fails closed on other save layouts)
//   2. for each registry named by the mapping, rewrite entry keys by exact match
//   3. encode and atomically replace the save, only if something changed

pub mod pipelines;
pub mod pure;
pub mod types;


pub use pipelines::transform_world;
pub use types::TransformOptions;
