use crate::scoring::domain::{role_family, RoleGroup};
use std::cmp::Ordering;
use std::collections::BTreeMap;

const DEFENSIVE_FAMILIES: &[&str] = &[
    "CB", "NCB", "BPD", "WCB", "Lib", "FB", "IFB", "WB", "IWB", "CWB",
];

const MIDFIELD_FAMILIES: &[&str] = &[
    "DM", "Anc", "Half Back", "BWM", "DLP", "Reg", "SV", "RPM", "CM", "Car", "B2B", "Mez",
    "Wide Mid", "Def Wing",
];

const ATTACKING_FAMILIES: &[&str] = &[
    "AF", "DLF", "CF", "TF", "Poach", "Pre Fwd", "F9", "IF", "Winger", "Inv Wing", "Tq", "Eng",
    "AMC", "SS", "AP",
];

/// Static role name -> display group table. Roles it does not know fall back to
/// [`RoleGroup::Midfield`].
#[derive(Debug, Clone, Default)]
pub struct RoleGroups {
    families: BTreeMap<String, RoleGroup>,
    roles: BTreeMap<String, RoleGroup>,
}

impl RoleGroups {
    pub fn standard() -> Self {
        let mut families = BTreeMap::new();
        let tables = [
            (RoleGroup::Defensive, DEFENSIVE_FAMILIES),
            (RoleGroup::Midfield, MIDFIELD_FAMILIES),
            (RoleGroup::Attacking, ATTACKING_FAMILIES),
        ];
        for (group, names) in tables {
            for family in names {
                families.insert(family.to_string(), group);
            }
        }
        Self {
            families,
            roles: BTreeMap::new(),
        }
    }

    /// Exact role names take precedence over the family table.
    pub fn with_overrides(
        mut self,
        overrides: impl IntoIterator<Item = (String, RoleGroup)>,
    ) -> Self {
        self.roles.extend(overrides);
        self
    }

    pub fn group_of(&self, role: &str) -> RoleGroup {
        if let Some(group) = self.roles.get(role) {
            return *group;
        }
        self.families
            .get(role_family(role))
            .copied()
            .unwrap_or_default()
    }

    /// Defensive, Midfield, Attacking, then alphabetical within a group.
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.group_of(left)
            .cmp(&self.group_of(right))
            .then_with(|| left.cmp(right))
    }

    pub fn sort_roles<S: AsRef<str>>(&self, roles: &mut [S]) {
        roles.sort_by(|left, right| self.compare(left.as_ref(), right.as_ref()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_map_to_their_group() {
        let groups = RoleGroups::standard();
        assert_eq!(groups.group_of("CB D"), RoleGroup::Defensive);
        assert_eq!(groups.group_of("IWB At"), RoleGroup::Defensive);
        assert_eq!(groups.group_of("Half Back"), RoleGroup::Midfield);
        assert_eq!(groups.group_of("DM S"), RoleGroup::Midfield);
        assert_eq!(groups.group_of("Pre Fwd De"), RoleGroup::Attacking);
        assert_eq!(groups.group_of("IF A"), RoleGroup::Attacking);
    }

    #[test]
    fn unknown_roles_default_to_midfield() {
        let groups = RoleGroups::standard();
        assert_eq!(groups.group_of("Sweeper Keeper Su"), RoleGroup::Midfield);
    }

    #[test]
    fn overrides_beat_family_lookup() {
        let groups = RoleGroups::standard()
            .with_overrides([("Def Wing De".to_string(), RoleGroup::Defensive)]);
        assert_eq!(groups.group_of("Def Wing De"), RoleGroup::Defensive);
        assert_eq!(groups.group_of("Def Wing Su"), RoleGroup::Midfield);
    }

    #[test]
    fn sorting_orders_groups_then_names() {
        let groups = RoleGroups::standard();
        let mut roles = vec!["Poach At", "CM Su", "AF At", "FB De", "Anc", "CB Co"];
        groups.sort_roles(&mut roles);
        assert_eq!(
            roles,
            vec!["CB Co", "FB De", "Anc", "CM Su", "AF At", "Poach At"]
        );
    }
}
