use role_fit::scoring::{
    evaluate, score_all, EvaluationFailure, Player, RoleCatalogue, Roster, ScoringEngine,
};

fn smith() -> Player {
    Player::with_ratings(
        "Smith",
        [
            ("Fin", 15.0),
            ("Ant", 12.0),
            ("Cmp", 10.0),
            ("OtB", 14.0),
            ("Fir", 13.0),
            ("Hea", 8.0),
            ("Tec", 11.0),
            ("Dec", 12.0),
            ("Acc", 14.0),
            ("Jum", 10.0),
            ("Pac", 15.0),
            ("Det", 16.0),
        ],
    )
}

/// Deterministic spread of ratings so every player differs.
fn synthetic_roster(size: usize) -> Roster {
    const CODES: &[&str] = &[
        "Acc", "Agg", "Agi", "Ant", "Bal", "Bra", "Cmp", "Cnt", "Cro", "Dec", "Det", "Dri", "Fin",
        "Fir", "Fla", "Hea", "Jum", "Lon", "Mar", "OtB", "Pac", "Pas", "Pos", "Sta", "Str", "Tck",
        "Tea", "Tec", "Vis", "Wor",
    ];
    Roster::from_players((0..size).map(|index| {
        let ratings = CODES
            .iter()
            .enumerate()
            .map(|(offset, code)| (*code, ((index * 7 + offset * 3) % 20 + 1) as f64));
        Player::with_ratings(format!("Player {index}"), ratings)
    }))
}

#[test]
fn smith_scores_exactly_as_a_poacher() {
    let catalogue = RoleCatalogue::standard().expect("standard catalogue");
    let poacher = catalogue.get("Poach At").expect("Poach At present");

    assert_eq!(evaluate(poacher, &smith()).expect("score"), 13.9);
}

#[test]
fn every_role_is_scored_for_a_complete_player() {
    let catalogue = RoleCatalogue::standard().expect("standard catalogue");
    let pairs = score_all(&[smith()], &catalogue);

    assert_eq!(pairs.len(), catalogue.len());
    let poacher = pairs
        .iter()
        .find(|pair| pair.role == "Poach At")
        .expect("Poach At scored");
    assert_eq!(poacher.score, 13.9);
}

#[test]
fn player_without_ratings_scores_zero_everywhere() {
    let catalogue = RoleCatalogue::standard().expect("standard catalogue");
    let blank = Player::with_ratings::<&str, _>("Blank", []);
    let pairs = score_all(&[blank], &catalogue);

    assert_eq!(pairs.len(), 74);
    assert!(pairs.iter().all(|pair| pair.score == 0.0));
}

#[test]
fn nan_rating_skips_only_roles_that_read_it() {
    let catalogue = RoleCatalogue::standard().expect("standard catalogue");
    let roster = Roster::from_players([Player::with_ratings(
        "Ortega",
        [("Fin", f64::NAN), ("Pac", 12.0)],
    )]);

    let reading_fin = catalogue
        .formulas()
        .iter()
        .filter(|formula| {
            formula
                .terms
                .iter()
                .any(|term| term.attributes.iter().any(|code| code == "Fin"))
        })
        .count();

    let run = ScoringEngine::sequential().score_all(&roster, &catalogue);
    assert_eq!(run.skipped.len(), reading_fin);
    assert_eq!(run.pairs.len(), catalogue.len() - reading_fin);
    assert!(run.skipped.iter().all(|skipped| matches!(
        skipped.failure,
        EvaluationFailure::NonFiniteAttribute { ref attribute, .. } if attribute == "Fin"
    )));
}

#[test]
fn parallel_and_sequential_runs_are_identical() {
    let catalogue = RoleCatalogue::standard().expect("standard catalogue");
    let roster = synthetic_roster(60);

    let sequential = ScoringEngine::sequential().score_all(&roster, &catalogue);
    let parallel = ScoringEngine::parallel().score_all(&roster, &catalogue);
    let repeated = ScoringEngine::parallel().score_all(&roster, &catalogue);

    assert_eq!(sequential.pairs.len(), 60 * 74);
    assert_eq!(sequential.pairs, parallel.pairs);
    assert_eq!(parallel.pairs, repeated.pairs);
}

#[test]
fn empty_inputs_produce_empty_runs() {
    let catalogue = RoleCatalogue::standard().expect("standard catalogue");
    assert!(score_all(&[], &catalogue).is_empty());

    let empty = RoleCatalogue::from_definitions(Vec::new()).expect("empty catalogue is valid");
    let run = ScoringEngine::default().score_all(&Roster::from_players([smith()]), &empty);
    assert!(run.is_empty());
    assert_eq!(run.players, vec!["Smith"]);
}
