use chrono::Duration;
use drill_core::time::fixed_now;
use drill_core::{
    DrillSettings, OperandRanges, Operator, Problem, ScriptedProblems, SessionStatus,
};
use services::{Clock, DrillError, DrillService};

fn problem(operator: Operator, a: u32, b: u32) -> Problem {
    Problem::new(operator, a, b).unwrap()
}

#[test]
fn full_drill_reaches_complete_exactly_at_total() {
    let settings = DrillSettings::default();
    let mut service = DrillService::new(settings, Some(2024), Clock::fixed(fixed_now())).unwrap();

    let total = settings.total_questions();
    for asked in 1..=total {
        assert!(!service.is_complete());
        let expected = service.current_problem().answer().to_string();
        let answer = service.submit(&expected).unwrap();
        assert!(answer.outcome.correct, "{expected} should be accepted");
        assert_eq!(service.session().question_count(), asked);
        assert_eq!(answer.report.is_some(), asked == total);
    }

    assert!(service.is_complete());
    let report = service.report().unwrap();
    assert_eq!(report.summary.score, total);
    assert_eq!(report.summary.percent(), 100);
    assert_eq!(service.submit("1").unwrap_err(), DrillError::Completed);
}

#[test]
fn mixed_answers_keep_score_and_count_apart() {
    let script = vec![
        problem(Operator::Add, 3, 4),
        problem(Operator::Divide, 7, 4),
        problem(Operator::Subtract, 30, 12),
    ];
    let settings = DrillSettings::new(3, OperandRanges::default()).unwrap();
    let mut service = DrillService::with_source(
        settings,
        Box::new(ScriptedProblems::new(script).unwrap()),
        Clock::fixed(fixed_now()),
    )
    .unwrap();

    assert!(service.submit("7").unwrap().outcome.correct);

    let division = service.submit("1.8").unwrap();
    assert!(!division.outcome.correct);
    assert_eq!(division.outcome.correct_answer.to_string(), "1.75");

    let last = service.submit("").unwrap();
    assert!(!last.outcome.correct);
    assert_eq!(last.outcome.status, SessionStatus::Complete);

    let summary = service.session().summary();
    assert_eq!(summary.score_label(), "Score: 1/3");
}

#[test]
fn restart_after_completion_starts_over() {
    let settings = DrillSettings::new(2, OperandRanges::default()).unwrap();
    let mut service = DrillService::new(settings, Some(1), Clock::fixed(fixed_now())).unwrap();
    service.submit("0").unwrap();
    service.submit("0").unwrap();
    assert!(service.is_complete());

    service.restart();
    let session = service.session();
    assert_eq!(session.score(), 0);
    assert_eq!(session.question_count(), 0);
    assert_eq!(session.status(), SessionStatus::Active);
    assert!(service.completed_at().is_none());
}

#[test]
fn restart_mid_drill_discards_progress() {
    let script = vec![
        problem(Operator::Add, 3, 4),
        problem(Operator::Multiply, 9, 9),
        problem(Operator::Divide, 7, 4),
    ];
    let settings = DrillSettings::new(3, OperandRanges::default()).unwrap();
    let clock = Clock::fixed(fixed_now());
    let mut service = DrillService::with_source(
        settings,
        Box::new(ScriptedProblems::new(script).unwrap()),
        clock,
    )
    .unwrap();
    assert!(service.submit("7").unwrap().outcome.correct);

    let mut later = clock;
    later.advance(Duration::minutes(5));
    let mut service = service.with_clock(later);
    service.restart();

    let session = service.session();
    assert_eq!(session.score(), 0);
    assert_eq!(session.question_count(), 0);
    assert_eq!(session.status(), SessionStatus::Active);
    assert_eq!(session.total_questions(), 3);
    assert_eq!(service.current_problem().expression(), "7 ÷ 4 =");

    service.submit("1.75").unwrap();
    service.submit("7").unwrap();
    let answer = service.submit("81").unwrap();
    let report = answer.report.expect("drill finished");
    assert_eq!(report.started_at, later.now());
    assert_eq!(report.summary.score_label(), "Score: 3/3");
}
