//! Typed IDs for the SQL resources these handlers manage.

mod job_agent;
mod job_target_group;

pub use job_agent::JobAgentId;
pub use job_target_group::JobTargetGroupId;
