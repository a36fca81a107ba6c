//! Group Readiness
//!
//! Workload-level readiness verdict combining the structural replica
//! counts (owned by the underlying ordinal-replica primitive) with the
//! semantic membership state (role assignment completed). A replica can
//! be pod-ready long before the cluster has elected or assigned roles.

mod evaluator;

pub use evaluator::is_instance_set_ready;
