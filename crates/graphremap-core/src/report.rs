//! Counters collected while remapping.

/// Outcome of remapping one vertex table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VertexTableStats {
    pub rows: usize,
    pub identifiers_assigned: usize,
}

/// Outcome of rewriting one edge table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeTableStats {
    pub rows: usize,
    pub endpoints_rewritten: usize,
    /// Endpoint values with no lookup entry, written back unchanged.
    pub endpoints_passed_through: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupReport {
    pub name: String,
    pub vertex_tables: usize,
    pub vertex_rows: usize,
    pub identifiers_assigned: usize,
    pub edge_tables: usize,
    pub edge_rows: usize,
    pub endpoints_rewritten: usize,
    pub endpoints_passed_through: usize,
}

impl GroupReport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl std::ops::AddAssign<VertexTableStats> for GroupReport {
    fn add_assign(&mut self, rhs: VertexTableStats) {
        self.vertex_tables = self.vertex_tables.saturating_add(1);
        self.vertex_rows = self.vertex_rows.saturating_add(rhs.rows);
        self.identifiers_assigned = self
            .identifiers_assigned
            .saturating_add(rhs.identifiers_assigned);
    }
}

impl std::ops::AddAssign<EdgeTableStats> for GroupReport {
    fn add_assign(&mut self, rhs: EdgeTableStats) {
        self.edge_tables = self.edge_tables.saturating_add(1);
        self.edge_rows = self.edge_rows.saturating_add(rhs.rows);
        self.endpoints_rewritten = self
            .endpoints_rewritten
            .saturating_add(rhs.endpoints_rewritten);
        self.endpoints_passed_through = self
            .endpoints_passed_through
            .saturating_add(rhs.endpoints_passed_through);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemapReport {
    pub groups: Vec<GroupReport>,
}

impl RemapReport {
    /// All groups summed into one row named `total`.
    pub fn totals(&self) -> GroupReport {
        let mut total = GroupReport::new("total");
        for group in &self.groups {
            total.vertex_tables += group.vertex_tables;
            total.vertex_rows += group.vertex_rows;
            total.identifiers_assigned += group.identifiers_assigned;
            total.edge_tables += group.edge_tables;
            total.edge_rows += group.edge_rows;
            total.endpoints_rewritten += group.endpoints_rewritten;
            total.endpoints_passed_through += group.endpoints_passed_through;
        }
        total
    }

    pub fn group(&self, name: &str) -> Option<&GroupReport> {
        self.groups.iter().find(|g| g.name == name)
    }
}
