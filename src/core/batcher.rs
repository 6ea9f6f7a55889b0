// ============================================================================
// Toxide - Group Planner
// ============================================================================
//
// File: src/core/batcher.rs
// Responsibility: environment grouping and execution phase planning
// Boundaries:
//   - ✅ Group membership resolution
//   - ✅ Strategy conflict detection
//   - ✅ Group ordering by strategy rank
//   - ✅ Phase computation for pool isolation
//   - ❌ No command execution
//   - ❌ No concurrency control
//   - ❌ No UI display logic
//
// ============================================================================

use anyhow::Result;
use std::collections::HashMap;

use crate::models::env::{GroupStrategy, TestEnv};

/// Name of the group collecting environments without an explicit one
pub const UNGROUPED: &str = "ungrouped";

/// A named group of environments sharing one execution strategy
#[derive(Debug, Clone)]
pub struct EnvGroup {
    /// Group name
    pub name: String,
    /// Execution strategy of the whole group
    pub strategy: GroupStrategy,
    /// Member environments in selection order
    pub envs: Vec<TestEnv>,
}

impl EnvGroup {
    pub fn len(&self) -> usize {
        self.envs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.envs.is_empty()
    }
}

/// One scheduling phase; the worker pool drains completely between phases
#[derive(Debug, Clone)]
pub struct Phase {
    /// Groups executed inside this phase
    pub groups: Vec<EnvGroup>,
}

impl Phase {
    /// Total environments across the phase's groups
    pub fn env_count(&self) -> usize {
        self.groups.iter().map(EnvGroup::len).sum()
    }
}

/// Assign each environment to a group and fix every group's strategy.
///
/// The first environment of a group fixes its strategy (explicitly, or
/// defaulting to `free`); a later environment naming a different strategy
/// for the same group is a configuration error. Groups are returned
/// ordered by strategy rank, then name.
pub fn plan_groups(envs: &[TestEnv]) -> Result<Vec<EnvGroup>> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, EnvGroup> = HashMap::new();

    for env in envs {
        let group_name = env.group.clone().unwrap_or_else(|| UNGROUPED.to_string());
        let declared = if env.group.is_some() { env.group_strategy } else { Some(GroupStrategy::Free) };

        match groups.get_mut(&group_name) {
            Some(group) => {
                if let Some(strategy) = declared {
                    if strategy != group.strategy {
                        anyhow::bail!(
                            "group {} already has strategy {}, environment {} declares {}",
                            group_name,
                            group.strategy,
                            env.name,
                            strategy
                        );
                    }
                }
                group.envs.push(env.clone());
            }
            None => {
                let strategy = declared.unwrap_or(GroupStrategy::Free);
                order.push(group_name.clone());
                groups.insert(
                    group_name.clone(),
                    EnvGroup { name: group_name, strategy, envs: vec![env.clone()] },
                );
            }
        }
    }

    let mut planned: Vec<EnvGroup> = order
        .into_iter()
        .map(|name| groups.remove(&name).expect("group recorded in order"))
        .collect();
    planned.sort_by(|a, b| {
        a.strategy.rank().cmp(&b.strategy.rank()).then_with(|| a.name.cmp(&b.name))
    });

    Ok(planned)
}

/// Fold ordered groups into phases. Consecutive non-isolated groups share
/// a phase; every isolated group becomes a phase of its own, which gives
/// it an empty pool before and after.
pub fn build_phases(groups: Vec<EnvGroup>) -> Vec<Phase> {
    let mut phases: Vec<Phase> = Vec::new();
    let mut current: Vec<EnvGroup> = Vec::new();

    for group in groups {
        if group.strategy.is_isolated() {
            if !current.is_empty() {
                phases.push(Phase { groups: std::mem::take(&mut current) });
            }
            phases.push(Phase { groups: vec![group] });
        } else {
            current.push(group);
        }
    }
    if !current.is_empty() {
        phases.push(Phase { groups: current });
    }

    phases
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(name: &str, group: Option<&str>, strategy: Option<GroupStrategy>) -> TestEnv {
        let mut env = TestEnv::new(name.to_string());
        env.group = group.map(str::to_string);
        env.group_strategy = strategy;
        env
    }

    #[test]
    fn ungrouped_envs_share_a_free_group() {
        let groups = plan_groups(&[env("a", None, None), env("b", None, None)]).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, UNGROUPED);
        assert_eq!(groups[0].strategy, GroupStrategy::Free);
        assert_eq!(groups[0].len(), 2);
    }

    #[test]
    fn first_member_fixes_the_strategy() {
        let groups = plan_groups(&[
            env("a", Some("g"), Some(GroupStrategy::Serial)),
            env("b", Some("g"), None),
        ])
        .unwrap();
        assert_eq!(groups[0].strategy, GroupStrategy::Serial);
        assert_eq!(groups[0].len(), 2);
    }

    #[test]
    fn conflicting_strategies_are_rejected() {
        let err = plan_groups(&[
            env("a", Some("g"), Some(GroupStrategy::Serial)),
            env("b", Some("g"), Some(GroupStrategy::Free)),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("already has strategy"));
    }

    #[test]
    fn defaulted_free_conflicts_with_later_explicit_strategy() {
        // The first member fixed the group to free by omission, so an
        // explicit serial afterwards is a contradiction.
        let err = plan_groups(&[
            env("a", Some("g"), None),
            env("b", Some("g"), Some(GroupStrategy::Serial)),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("already has strategy free"));
    }

    #[test]
    fn groups_are_ordered_by_rank_then_name() {
        let groups = plan_groups(&[
            env("a", Some("iso"), Some(GroupStrategy::IsolatedSerial)),
            env("b", Some("solo"), Some(GroupStrategy::IsolatedFree)),
            env("c", Some("plain"), Some(GroupStrategy::Serial)),
            env("d", None, None),
        ])
        .unwrap();
        let names: Vec<_> = groups.iter().map(|group| group.name.as_str()).collect();
        assert_eq!(names, vec!["plain", UNGROUPED, "solo", "iso"]);
    }

    #[test]
    fn isolated_groups_get_their_own_phase() {
        let groups = plan_groups(&[
            env("a", None, None),
            env("b", Some("plain"), Some(GroupStrategy::Serial)),
            env("c", Some("solo"), Some(GroupStrategy::IsolatedFree)),
            env("d", Some("iso"), Some(GroupStrategy::IsolatedSerial)),
        ])
        .unwrap();
        let phases = build_phases(groups);
        assert_eq!(phases.len(), 3);
        // phase 1: all non-isolated groups together
        assert_eq!(phases[0].groups.len(), 2);
        assert_eq!(phases[0].env_count(), 2);
        // phases 2 and 3: one isolated group each
        assert_eq!(phases[1].groups[0].name, "solo");
        assert_eq!(phases[2].groups[0].name, "iso");
    }

    #[test]
    fn no_phases_for_no_envs() {
        let phases = build_phases(plan_groups(&[]).unwrap());
        assert!(phases.is_empty());
    }
}
