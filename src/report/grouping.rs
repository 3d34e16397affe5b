use crate::model::FlowGroup;
use ahash::AHashMap;

/// Flow groups sharing a project, in the order they were first seen.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectBucket {
    pub project: String,
    pub flow_groups: Vec<FlowGroup>,
}

/// Partitions flow groups by project name.
///
/// Buckets appear in the order their project was first encountered and keep
/// the relative order of their members.
pub fn group_by_project(flow_groups: impl IntoIterator<Item = FlowGroup>) -> Vec<ProjectBucket> {
    let mut index: AHashMap<String, usize> = AHashMap::new();
    let mut buckets: Vec<ProjectBucket> = Vec::new();

    for flow_group in flow_groups {
        let project = flow_group.project().name.clone();
        match index.get(&project) {
            Some(&idx) => buckets[idx].flow_groups.push(flow_group),
            None => {
                index.insert(project.clone(), buckets.len());
                buckets.push(ProjectBucket {
                    project,
                    flow_groups: vec![flow_group],
                });
            }
        }
    }

    buckets
}
