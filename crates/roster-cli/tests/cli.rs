use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

fn roster() -> Command {
    Command::cargo_bin("roster").unwrap()
}

// ── schools ─────────────────────────────────────────────────────────────────

#[test]
fn test_schools_lists_regions_and_notes() {
    roster()
        .args(["schools", "--catalog", &fixture("schools.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("== 중구 (jung-gu) =="))
        .stdout(predicate::str::contains(
            "성안 | 48차시 | 03.02~07.18 | 월(1,2교시)",
        ))
        .stdout(predicate::str::contains(
            "삼산 | 30차시 | 03.02~05.01, 06.01~06.30 | 화(2교시) 금(5,6교시) | 주의",
        ))
        .stdout(predicate::str::contains("언양 | 8차시 | 09.01~10.30 | 수(1교시) | 보조"))
        .stdout(predicate::str::contains("== 참고사항 =="))
        .stdout(predicate::str::contains("삼산 : 강당 수업, 실내화 지참"));
}

#[test]
fn test_schools_single_region() {
    roster()
        .args([
            "schools",
            "--catalog",
            &fixture("schools.json"),
            "--region",
            "buk-gu",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("농소"))
        .stdout(predicate::str::contains("성안").not())
        .stdout(predicate::str::contains("별도 참고사항이 없습니다."));
}

#[test]
fn test_schools_unknown_region_rejected() {
    roster()
        .args([
            "schools",
            "--catalog",
            &fixture("schools.json"),
            "--region",
            "seo-gu",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown region 'seo-gu'"));
}

#[test]
fn test_schools_duplicate_names_fail_load() {
    roster()
        .args(["schools", "--catalog", &fixture("duplicate_names.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load school catalog"))
        .stderr(predicate::str::contains("duplicate school name '성안'"));
}

#[test]
fn test_schools_missing_catalog_fails() {
    roster()
        .args(["schools", "--catalog", &fixture("nope.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn test_schools_custom_year() {
    roster()
        .args([
            "schools",
            "--catalog",
            &fixture("schools.json"),
            "--year",
            "2028",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("농소 | 16차시 | 06.15~06.20"));
}

// ── check ───────────────────────────────────────────────────────────────────

#[test]
fn test_check_clean_plan_text() {
    roster()
        .args([
            "check",
            "--catalog",
            &fixture("schools.json"),
            "--plan",
            &fixture("plan_clean.json"),
            "--strict",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("김강사 (#1)"))
        .stdout(predicate::str::contains("학교: 성안, 삼산"))
        .stdout(predicate::str::contains("총 차시: 78"))
        .stdout(predicate::str::contains("출강 요일: 월, 화, 금"))
        .stdout(predicate::str::contains("이강사 (#2)"))
        .stdout(predicate::str::contains("출강 요일: 수"))
        .stdout(predicate::str::contains("[중복]").not())
        .stdout(predicate::str::contains("미배정 학교: 2"));
}

#[test]
fn test_check_conflicts_text() {
    roster()
        .args([
            "check",
            "--catalog",
            &fixture("schools.json"),
            "--plan",
            &fixture("plan_conflict.json"),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[중복] 성안초 & 병영초 : 월요일에 수업이 겹칩니다.",
        ))
        .stdout(predicate::str::contains(
            "[중복] 삼산초 & 농소초 : 금요일에 수업이 겹칩니다.",
        ))
        .stdout(predicate::str::contains("미배정 학교: 1"));
}

#[test]
fn test_check_strict_exits_on_conflict() {
    roster()
        .args([
            "check",
            "--catalog",
            &fixture("schools.json"),
            "--plan",
            &fixture("plan_conflict.json"),
            "--strict",
        ])
        .assert()
        .code(2);
}

#[test]
fn test_check_json_output() {
    let output = roster()
        .args([
            "check",
            "--catalog",
            &fixture("schools.json"),
            "--plan",
            &fixture("plan_conflict.json"),
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["unassignedCount"], 1);
    let teachers = value["teachers"].as_array().unwrap();
    assert_eq!(teachers.len(), 2);
    assert_eq!(teachers[0]["name"], "김강사");
    assert_eq!(teachers[0]["stats"]["totalSessions"], 72);
    assert_eq!(teachers[0]["stats"]["busyDays"], serde_json::json!(["mon"]));
    assert_eq!(
        teachers[0]["conflicts"],
        serde_json::json!([{"first": "성안", "second": "병영", "weekday": "mon"}])
    );
    assert_eq!(teachers[1]["conflicts"][0]["weekday"], "fri");
}

#[test]
fn test_check_duplicate_assignment_fails() {
    roster()
        .args([
            "check",
            "--catalog",
            &fixture("schools.json"),
            "--plan",
            &fixture("plan_duplicate.json"),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot assign '성안' to '이강사'"))
        .stderr(predicate::str::contains("already assigned"));
}
