use drill_core::{DrillSettings, OperandRanges};

use super::test_harness::setup_drill_harness;
use crate::vm::DrillAction;

fn settings(total: u32) -> DrillSettings {
    DrillSettings::new(total, OperandRanges::default()).unwrap()
}

/// Byte range of the opening tag of the element with `id`.
fn tag_bounds(html: &str, id: &str) -> (usize, usize) {
    let marker = format!("id=\"{id}\"");
    let at = html
        .find(&marker)
        .unwrap_or_else(|| panic!("no #{id} in {html}"));
    let start = html[..at].rfind('<').expect("tag start");
    let end = at + html[at..].find('>').expect("tag end") + 1;
    (start, end)
}

fn opening_tag<'a>(html: &'a str, id: &str) -> &'a str {
    let (start, end) = tag_bounds(html, id);
    &html[start..end]
}

/// Text between the element's opening tag and the next closing tag.
fn inner_text<'a>(html: &'a str, id: &str) -> &'a str {
    let (_, end) = tag_bounds(html, id);
    let rest = &html[end..];
    &rest[..rest.find("</").expect("closing tag")]
}

fn has_flag(tag: &str, name: &str) -> bool {
    tag.contains(name)
        && !tag.contains(&format!("{name}=false"))
        && !tag.contains(&format!("{name}=\"false\""))
}

#[test]
fn drill_view_smoke_renders_first_problem() {
    let harness = setup_drill_harness(settings(10), 7);
    let html = harness.render();
    let expression = harness.current_expression();
    assert!(
        inner_text(&html, "drill-problem").contains(&expression),
        "missing {expression} in {html}"
    );
    assert!(html.contains("Score: 0/0"), "missing score in {html}");
    assert!(html.contains("Question 1 of 10"), "missing progress in {html}");
    for label in ["Submit", "Restart", "Exit"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
}

#[test]
fn drill_view_smoke_root_takes_keyboard_focus() {
    let harness = setup_drill_harness(settings(10), 7);
    let html = harness.render();
    assert!(
        has_flag(opening_tag(&html, "drill-root"), "autofocus"),
        "drill root not autofocused in {html}"
    );
    assert!(
        !has_flag(opening_tag(&html, "drill-submit"), "disabled"),
        "submit disabled at start in {html}"
    );
}

#[test]
fn drill_view_smoke_correct_answer_updates_score() {
    let mut harness = setup_drill_harness(settings(10), 11);
    let answer = harness.current_answer();
    harness.type_answer(&answer);
    assert!(harness.render().contains(&answer), "typed answer not shown");

    harness.dispatch(DrillAction::Submit);
    let html = harness.render();
    assert!(html.contains("Your answer is correct!"), "missing feedback in {html}");
    assert!(html.contains("Score: 1/1"), "missing score in {html}");
}

#[test]
fn drill_view_smoke_completion_disables_submit() {
    let mut harness = setup_drill_harness(settings(1), 3);
    harness.dispatch(DrillAction::Submit);
    let html = harness.render();
    assert!(html.contains("Wrong answer!"), "missing feedback in {html}");
    assert!(
        html.contains("Your drill is complete. Your score is 0/1"),
        "missing completion in {html}"
    );
    assert!(
        has_flag(opening_tag(&html, "drill-submit"), "disabled"),
        "submit not disabled in {html}"
    );

    harness.dispatch(DrillAction::Restart);
    let html = harness.render();
    assert!(
        !has_flag(opening_tag(&html, "drill-submit"), "disabled"),
        "submit still disabled in {html}"
    );
    assert!(html.contains("Score: 0/0"), "restart did not reset in {html}");
    assert!(!html.contains("Your drill is complete"), "stale notice in {html}");
}

#[test]
fn drill_view_smoke_exit_calls_handler() {
    let mut harness = setup_drill_harness(settings(10), 5);
    harness.dispatch(DrillAction::Exit);
    assert_eq!(harness.exits(), 1);
}
