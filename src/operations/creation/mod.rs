mod build_topology;

pub use build_topology::BuildTopology;
