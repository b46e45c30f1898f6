use super::{RoleDefinition, TermDefinition};

/// Version tag of the built-in formula set.
pub(super) const STANDARD_VERSION: &str = "standard-2024.1";

const PHYSICAL: &[&str] = &["Acc", "Jum", "Pac", "Det"];

fn role(name: &str, terms: Vec<TermDefinition>) -> RoleDefinition {
    RoleDefinition {
        name: name.to_string(),
        terms,
    }
}

fn term(codes: &[&str], weight: f64) -> TermDefinition {
    TermDefinition {
        attributes: codes.iter().map(|code| code.to_string()).collect(),
        weight,
        divisor: None,
    }
}

/// A term averaged over a fixed divisor instead of its attribute count.
fn term_over(codes: &[&str], divisor: u32, weight: f64) -> TermDefinition {
    TermDefinition {
        divisor: Some(divisor),
        ..term(codes, weight)
    }
}

/// The 74 built-in role formulas in display order.
pub(super) fn standard_definitions() -> Vec<RoleDefinition> {
    vec![
        role(
            "AF At",
            vec![
                term(&["Dri", "Fin", "Fir", "Tec", "OtB", "Cmp", "Acc"], 0.8),
                term(&["Pas", "Ant", "Dec", "Wor", "Agi", "Bal", "Pac", "Sta"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "DLF At",
            vec![
                term(&["Fir", "Pas", "Tec", "Cmp", "Dec", "OtB", "Tea"], 0.8),
                term(&["Fin", "Ant", "Fla", "Vis", "Bal", "Str", "Dri"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "DLF Su",
            vec![
                term(&["Fir", "Pas", "Tec", "Cmp", "Dec", "OtB", "Tea"], 0.8),
                term(&["Fin", "Ant", "Fla", "Vis", "Bal", "Str"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "CF At",
            vec![
                term(
                    &[
                        "Dri",
                        "Fir",
                        "Hea",
                        "Tec",
                        "Ant",
                        "Cmp",
                        "OtB",
                        "Acc",
                        "Agi",
                        "Str",
                        "Fin",
                    ],
                    0.8,
                ),
                term(&["Vis", "Tea", "Wor", "Bal", "Pas", "Lon", "Jum", "Pac", "Sta", "Dec"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "CF Su",
            vec![
                term(
                    &[
                        "Dri",
                        "Fir",
                        "Hea",
                        "Lon",
                        "Pas",
                        "Tec",
                        "Ant",
                        "Cmp",
                        "Dec",
                        "OtB",
                        "Vis",
                        "Acc",
                        "Agi",
                        "Str",
                    ],
                    0.8,
                ),
                term(&["Fin", "Tea", "Wor", "Bal", "Jum", "Pac", "Sta"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "TF At",
            vec![
                term(&["Hea", "Bra", "Tea", "Bal", "Jum", "Str", "Fin", "Cmp"], 0.8),
                term(&["Fir", "Agg", "Ant", "Dec", "OtB"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "TF Su",
            vec![
                term(&["Hea", "Bra", "Tea", "Bal", "Jum", "Str"], 0.8),
                term(&["Fin", "Fir", "Agg", "Ant", "Cmp", "Dec", "OtB"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "Poach At",
            vec![
                term(&["Fin", "Ant", "Cmp", "OtB"], 0.8),
                term(&["Fir", "Hea", "Tec", "Dec", "Acc"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "Pre Fwd At",
            vec![
                term(&["Agg", "Ant", "Bra", "Dec", "Tea", "Wor", "Acc", "Pac", "Sta"], 0.8),
                term(&["Fir", "Cmp", "Cnt", "Agi", "Bal", "Str", "OtB", "Fin"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "Pre Fwd Su",
            vec![
                term(&["Agg", "Ant", "Bra", "Dec", "Tea", "Wor", "Acc", "Pac", "Sta"], 0.8),
                term(&["Fir", "Cmp", "Cnt", "Agi", "Bal", "Str", "OtB", "Pas"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "Pre Fwd De",
            vec![
                term(&["Agg", "Ant", "Bra", "Dec", "Tea", "Wor", "Acc", "Pac", "Sta"], 0.8),
                term(&["Fir", "Cmp", "Cnt", "Agi", "Bal", "Str"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "F9 Su",
            vec![
                term(&["Dri", "Fir", "Pas", "Tec", "Cmp", "Dec", "OtB", "Vis", "Acc", "Agi"], 0.8),
                term(&["Fin", "Ant", "Fla", "Tea", "Bal"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "IF A",
            vec![
                term(&["Dri", "Fin", "Fir", "Tec", "OtB", "Acc", "Agi"], 0.8),
                term(&["Lon", "Pas", "Ant", "Cmp", "Fla", "Wor", "Bal", "Pac", "Sta"], 0.2),
            ],
        ),
        role(
            "IF S",
            vec![
                term(&["Dri", "Fin", "Fir", "Tec", "OtB", "Acc", "Agi"], 0.8),
                term(&["Lon", "Pas", "Ant", "Cmp", "Fla", "Vis", "Wor", "Bal", "Pac", "Sta"], 0.2),
            ],
        ),
        role(
            "Wide Mid At",
            vec![
                term(&["Pas", "Tck", "Tea", "Wor", "Dec"], 0.8),
                term(&["Cro", "Fir", "OtB", "Tec", "Ant", "Cmp", "Sta", "Vis"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "Wide Mid Su",
            vec![
                term(&["Pas", "Tck", "Tea", "Wor", "Dec"], 0.8),
                term(&["Cro", "Fir", "OtB", "Tec", "Ant", "Cmp", "Sta", "Pos", "Vis", "Cnt"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "Wide Mid De",
            vec![
                term(&["Pas", "Tck", "Pos", "Tea", "Wor", "Cnt", "Dec"], 0.8),
                term(&["Cro", "Fir", "Mar", "Tec", "Ant", "Cmp", "Sta"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "Def Wing Su",
            vec![
                term(&["Tec", "OtB", "Pos", "Tea", "Wor", "Sta"], 0.8),
                term(
                    &[
                        "Cro",
                        "Dri",
                        "Fir",
                        "Mar",
                        "Tck",
                        "Agg",
                        "Cnt",
                        "Dec",
                        "Acc",
                        "Cmp",
                        "Pas",
                    ],
                    0.2,
                ),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "Def Wing De",
            vec![
                term(&["Tec", "OtB", "Pos", "Tea", "Wor", "Sta"], 0.8),
                term(&["Cro", "Dri", "Fir", "Mar", "Tck", "Agg", "Cnt", "Dec", "Acc"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "Inv Wing At",
            vec![
                term(&["Cro", "Dri", "Pas", "Tec", "Acc", "Agi"], 0.8),
                term(
                    &[
                        "Fir",
                        "Lon",
                        "OtB",
                        "Wor",
                        "Bal",
                        "Pac",
                        "Sta",
                        "Vis",
                        "Cmp",
                        "Dec",
                        "Ant",
                        "Fla",
                    ],
                    0.2,
                ),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "Inv Wing Su",
            vec![
                term(&["Cro", "Dri", "Pas", "Tec", "Acc", "Agi"], 0.8),
                term(&["Fir", "Lon", "OtB", "Wor", "Bal", "Pac", "Sta", "Vis", "Cmp", "Dec"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "Winger Su",
            vec![
                term(&["Cro", "Dri", "Tec", "Acc", "Agi"], 0.8),
                term_over(&["Fir", "Pas", "OtB", "Wor", "Bal", "Pac", "Sta"], 6, 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "Winger At",
            vec![
                term(&["Cro", "Dri", "Tec", "Acc", "Agi"], 0.8),
                term_over(&["Fir", "Pas", "OtB", "Wor", "Bal", "Pac", "Sta", "Fla", "Ant"], 8, 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "Tq At",
            vec![
                term(&["Dri", "Fir", "Pas", "Tec", "Cmp", "Dec", "Fla", "OtB", "Vis", "Acc"], 0.8),
                term(&["Fin", "Ant", "Agi", "Bal"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "Eng Su",
            vec![
                term(&["Fir", "Pas", "Tec", "Cmp", "Dec", "Vis"], 0.8),
                term(&["Dri", "Ant", "Fla", "OtB", "Tea", "Agi"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "AMC At",
            vec![
                term(&["Fir", "Lon", "Pas", "Tec", "Ant", "Dec", "Fla", "OtB"], 0.8),
                term(&["Dri", "Cmp", "Vis", "Agi", "Fin"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "AMC Su",
            vec![
                term(&["Fir", "Lon", "Pas", "Tec", "Ant", "Dec", "Fla", "OtB"], 0.8),
                term(&["Dri", "Cmp", "Vis", "Agi"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "SS At",
            vec![
                term(&["Dri", "Fin", "Fir", "Ant", "Cmp", "OtB", "Acc"], 0.8),
                term(&["Pas", "Tec", "Cnt", "Dec", "Wor", "Agi", "Bal", "Pac", "Sta"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "AP At",
            vec![
                term(&["Fir", "Pas", "Tec", "Cmp", "Dec", "OtB", "Tea", "Vis"], 0.8),
                term(&["Dri", "Ant", "Fla", "Agi", "Acc"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "AP Su",
            vec![
                term(&["Fir", "Pas", "Tec", "Cmp", "Dec", "OtB", "Tea", "Vis"], 0.8),
                term(&["Dri", "Ant", "Fla", "Agi"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "Car Su",
            vec![
                term(&["Fir", "Pas", "Tck", "Dec", "Pos", "Tea", "Sta"], 0.8),
                term(&["Tec", "Cmp", "Ant", "Cnt", "OtB", "Vis", "Wor"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "B2B Su",
            vec![
                term(&["Pas", "Tck", "OtB", "Tea", "Wor", "Sta"], 0.8),
                term(
                    &[
                        "Dri",
                        "Fin",
                        "Fir",
                        "Lon",
                        "Tec",
                        "Agg",
                        "Ant",
                        "Cmp",
                        "Dec",
                        "Pos",
                        "Acc",
                        "Bal",
                        "Pac",
                        "Str",
                    ],
                    0.2,
                ),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "Mez At",
            vec![
                term(&["Pas", "Tec", "Wor", "OtB", "Dec", "Acc"], 0.8),
                term(&["Dri", "Fir", "Lon", "Fin", "Ant", "Cmp", "Vis", "Bal", "Sta", "Fla"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "Mez Su",
            vec![
                term(&["Pas", "Tec", "Wor", "OtB", "Dec", "Acc"], 0.8),
                term(&["Dri", "Fir", "Lon", "Tck", "Ant", "Cmp", "Vis", "Bal", "Sta"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "CM At",
            vec![
                term(&["Fir", "Pas", "Tck", "Dec", "Tea"], 0.8),
                term(&["Tec", "Ant", "Cmp", "Lon", "OtB", "Vis", "Wor", "Sta", "Acc"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "CM Su",
            vec![
                term(&["Fir", "Pas", "Tck", "Dec", "Tea"], 0.8),
                term(&["Tec", "Ant", "Cmp", "Cnt", "OtB", "Vis", "Wor", "Sta"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "CM De",
            vec![
                term(&["Tck", "Cnt", "Dec", "Pos", "Tea"], 0.8),
                term(&["Fir", "Mar", "Pas", "Tec", "Agg", "Ant", "Cmp", "Wor", "Sta"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "RPM Su",
            vec![
                term(
                    &[
                        "Fir",
                        "Pas",
                        "Tec",
                        "OtB",
                        "Dec",
                        "Cmp",
                        "Ant",
                        "Tea",
                        "Vis",
                        "Wor",
                        "Acc",
                        "Sta",
                    ],
                    0.8,
                ),
                term(&["Dri", "Lon", "Pos", "Cnt", "Agi", "Bal", "Pac"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "Half Back",
            vec![
                term(&["Mar", "Tck", "Ant", "Cmp", "Cnt", "Dec", "Pos", "Tea"], 0.8),
                term(&["Fir", "Pas", "Agg", "Bra", "Wor", "Jum", "Sta", "Str"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "Reg",
            vec![
                term(&["Fir", "Pas", "Tec", "Cmp", "Dec", "Fla", "OtB", "Tea", "Vis"], 0.8),
                term(&["Dri", "Lon", "Ant", "Bal"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "Anc",
            vec![
                term(&["Mar", "Tck", "Ant", "Cnt", "Dec", "Pos"], 0.8),
                term(&["Cmp", "Tea", "Str"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "DLP Su",
            vec![
                term(&["Fir", "Pas", "Tec", "Cmp", "Dec", "Tea", "Vis"], 0.8),
                term(&["OtB", "Ant", "Pos", "Bal"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "DLP De",
            vec![
                term(&["Fir", "Pas", "Tec", "Cmp", "Dec", "Tea", "Vis"], 0.8),
                term(&["Tck", "Ant", "Pos", "Bal"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "SV Su",
            vec![
                term(&["Mar", "Pas", "Tck", "OtB", "Pos", "Wor", "Pac", "Sta"], 0.8),
                term(&["Fin", "Fir", "Lon", "Ant", "Cmp", "Cnt", "Dec", "Acc", "Bal", "Str"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "DM S",
            vec![
                term(&["Tck", "Ant", "Tea", "Cnt"], 0.8),
                term(&["Mar", "Pas", "Cmp", "Dec", "Agg", "Wor", "Str", "Sta", "Fir"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "DM D",
            vec![
                term(&["Tck", "Ant", "Tea", "Cnt"], 0.8),
                term(&["Mar", "Pas", "Cmp", "Dec", "Agg", "Wor", "Str", "Sta"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "BWM Su",
            vec![
                term(&["Tck", "Agg", "Ant", "Tea", "Wor", "Sta"], 0.8),
                term(&["Mar", "Bra", "Cnt", "Pas", "Agi", "Pac", "Str"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "BWM De",
            vec![
                term(&["Tck", "Agg", "Ant", "Tea", "Wor", "Sta"], 0.8),
                term(&["Mar", "Bra", "Cnt", "Pos", "Agi", "Pac", "Str"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "CWB At",
            vec![
                term(&["Cro", "Dri", "Tec", "Wor", "Tea", "OtB", "Sta", "Acc"], 0.8),
                term(
                    &[
                        "Fir",
                        "Mar",
                        "Pas",
                        "Tck",
                        "Ant",
                        "Dec",
                        "Fla",
                        "Pos",
                        "Agi",
                        "Bal",
                        "Pac",
                    ],
                    0.2,
                ),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "CWB Su",
            vec![
                term(&["Cro", "Dri", "Tec", "Wor", "Tea", "OtB", "Sta", "Acc"], 0.8),
                term(
                    &[
                        "Fir",
                        "Mar",
                        "Pas",
                        "Tck",
                        "Ant",
                        "Dec",
                        "Fla",
                        "Pos",
                        "Agi",
                        "Bal",
                        "Pac",
                    ],
                    0.2,
                ),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "IWB At",
            vec![
                term(&["Pas", "Tck", "Pos", "Tea", "Ant", "Dec"], 0.8),
                term(
                    &[
                        "Fir",
                        "Mar",
                        "Tec",
                        "Cmp",
                        "Cnt",
                        "OtB",
                        "Wor",
                        "Agi",
                        "Acc",
                        "Sta",
                        "Vis",
                        "Pac",
                        "Dri",
                        "Cro",
                        "Lon",
                        "Fla",
                    ],
                    0.2,
                ),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "IWB Su",
            vec![
                term(&["Pas", "Tck", "Pos", "Tea", "Ant", "Dec"], 0.8),
                term(
                    &[
                        "Fir",
                        "Mar",
                        "Tec",
                        "Cmp",
                        "Cnt",
                        "OtB",
                        "Wor",
                        "Agi",
                        "Acc",
                        "Sta",
                        "Vis",
                    ],
                    0.2,
                ),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "IWB De",
            vec![
                term(&["Pas", "Tck", "Pos", "Tea", "Ant", "Dec"], 0.8),
                term(&["Fir", "Mar", "Tec", "Cmp", "Cnt", "OtB", "Wor", "Agi", "Acc", "Sta"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "IFB De",
            vec![
                term(&["Hea", "Mar", "Tck", "Pos", "Str"], 0.8),
                term(
                    &[
                        "Dri",
                        "Fir",
                        "Pas",
                        "Tec",
                        "Agg",
                        "Ant",
                        "Bra",
                        "Cmp",
                        "Cnt",
                        "Dec",
                        "Wor",
                        "Agi",
                        "Jum",
                        "Pac",
                    ],
                    0.2,
                ),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "WB At",
            vec![
                term(&["Cro", "Dri", "Mar", "Tck", "OtB", "Tea", "Wor", "Sta", "Acc"], 0.8),
                term(
                    &[
                        "Fir",
                        "Pas",
                        "Tec",
                        "Dec",
                        "Cnt",
                        "OtB",
                        "Agi",
                        "Bal",
                        "Pac",
                        "Ant",
                        "Fla",
                    ],
                    0.2,
                ),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "WB Su",
            vec![
                term(&["Cro", "Dri", "Mar", "Tck", "OtB", "Tea", "Wor", "Sta", "Acc"], 0.8),
                term(&["Fir", "Pas", "Tec", "Dec", "Cnt", "OtB", "Agi", "Bal", "Pac", "Ant"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "WB De",
            vec![
                term(&["Mar", "Tck", "Pos", "Tea", "Wor", "Ant", "Sta", "Acc"], 0.8),
                term(
                    &[
                        "Cro",
                        "Dri",
                        "Fir",
                        "Pas",
                        "Tec",
                        "Dec",
                        "Cnt",
                        "OtB",
                        "Agi",
                        "Bal",
                        "Pac",
                    ],
                    0.2,
                ),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "FB At",
            vec![
                term(&["Mar", "Tck", "Cro", "Pos", "Ant", "Pos", "Tea"], 0.8),
                term(
                    &[
                        "Dri",
                        "Fir",
                        "Pas",
                        "Tec",
                        "Wor",
                        "Dec",
                        "Cnt",
                        "OtB",
                        "Agi",
                        "Sta",
                        "Pac",
                    ],
                    0.2,
                ),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "FB Su",
            vec![
                term(&["Mar", "Tck", "Tea", "Pos", "Cnt", "Ant"], 0.8),
                term(&["Cro", "Dri", "Pas", "Tec", "Wor", "Dec", "Sta", "Pac"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "FB De",
            vec![
                term(&["Mar", "Tck", "Pos", "Cnt", "Ant"], 0.8),
                term(&["Cro", "Pas", "Tea", "Wor", "Dec", "Sta", "Pac"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "Lib Su",
            vec![
                term(
                    &[
                        "Fir",
                        "Hea",
                        "Mar",
                        "Pas",
                        "Tck",
                        "Tec",
                        "Dec",
                        "Cmp",
                        "Pos",
                        "Tea",
                        "Str",
                        "Jum",
                    ],
                    0.8,
                ),
                term(&["Ant", "Bra", "Cnt", "Pac", "Sta", "Dri", "Vis"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "Lib De",
            vec![
                term(
                    &[
                        "Fir",
                        "Hea",
                        "Mar",
                        "Pas",
                        "Tck",
                        "Tec",
                        "Dec",
                        "Cmp",
                        "Pos",
                        "Tea",
                        "Str",
                        "Jum",
                    ],
                    0.8,
                ),
                term(&["Ant", "Bra", "Cnt", "Pac", "Sta"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "BPD Co",
            vec![
                term(&["Hea", "Mar", "Pas", "Tck", "Pos", "Cmp", "Str", "Jum"], 0.8),
                term(&["Fir", "Tec", "Pac", "Ant", "Bra", "Cnt", "Dec", "Vis"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "BPD St",
            vec![
                term(&["Hea", "Mar", "Pas", "Tck", "Pos", "Cmp", "Str", "Jum"], 0.8),
                term(&["Fir", "Tec", "Agg", "Ant", "Bra", "Cnt", "Dec", "Vis"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "BPD De",
            vec![
                term(&["Hea", "Mar", "Pas", "Tck", "Pos", "Cmp", "Str", "Jum"], 0.8),
                term(&["Fir", "Tec", "Agg", "Ant", "Bra", "Cnt", "Dec", "Vis", "Pac"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "WCB At",
            vec![
                term(&["Dri", "Hea", "Mar", "Tck", "Pos", "Pac", "Str", "Jum", "Sta"], 0.8),
                term(
                    &[
                        "Cro",
                        "Fir",
                        "Pas",
                        "Tec",
                        "Agg",
                        "Ant",
                        "Bra",
                        "Cmp",
                        "Cnt",
                        "Dec",
                        "OtB",
                        "Wor",
                        "Agi",
                    ],
                    0.2,
                ),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "WCB Su",
            vec![
                term(&["Dri", "Hea", "Mar", "Tck", "Pos", "Pac", "Str", "Jum"], 0.8),
                term(
                    &[
                        "Cro",
                        "Fir",
                        "Pas",
                        "Tec",
                        "Agg",
                        "Ant",
                        "Bra",
                        "Cmp",
                        "Cnt",
                        "Dec",
                        "OtB",
                        "Wor",
                        "Agi",
                        "Sta",
                    ],
                    0.2,
                ),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "WCB De",
            vec![
                term(&["Hea", "Mar", "Tck", "Pos", "Str", "Jum"], 0.8),
                term(
                    &[
                        "Dri",
                        "Fir",
                        "Pas",
                        "Tec",
                        "Agg",
                        "Ant",
                        "Bra",
                        "Cmp",
                        "Cnt",
                        "Dec",
                        "Wor",
                        "Agi",
                        "Pac",
                    ],
                    0.2,
                ),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "CB Co",
            vec![
                term(&["Tck", "Dec", "Pos", "Dec", "Cnt", "Ant", "Pac"], 0.8),
                term(&["Cmp", "Hea", "Bra", "Str", "Jum"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "CB St",
            vec![
                term(&["Hea", "Tck", "Dec", "Pos", "Str", "Jum", "Bra", "Agg"], 0.8),
                term(&["Cnt", "Ant", "Cmp", "Cnt", "Mar"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "CB D",
            vec![
                term(&["Hea", "Tck", "Mar", "Pos", "Str", "Jum"], 0.8),
                term(&["Cnt", "Pac", "Agg", "Ant", "Bra", "Cmp", "Cnt", "Dec"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "NCB Co",
            vec![
                term(&["Hea", "Tck", "Ant", "Bra", "Pos", "Str", "Jum"], 0.8),
                term(&["Mar", "Cnt", "Pac"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "NCB De",
            vec![
                term(&["Hea", "Tck", "Agg", "Bra", "Pos", "Str", "Jum"], 0.8),
                term(&["Mar", "Cnt", "Ant", "Pac"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
        role(
            "NCB St",
            vec![
                term(&["Hea", "Tck", "Agg", "Bra", "Pos", "Str", "Jum"], 0.8),
                term(&["Mar", "Cnt", "Ant"], 0.2),
                term(PHYSICAL, 0.1),
            ],
        ),
    ]
}
