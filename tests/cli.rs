mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::prelude::*;
    use predicates::str::contains;

    use std::fs;
    use std::path::Path;
    use std::process::Command;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "runlog";

    fn write_fixture(base: &Path) -> TestResult {
        fs::create_dir_all(base.join("logs"))?;
        fs::write(
            base.join("logs/2025-07-30-01.md"),
            "# 朝ラン\n\n- 距離：10.5km\n- 時間：45:13\n",
        )?;
        fs::write(
            base.join("logs/2025-07-12.md"),
            "- 距離：8.2km\n- 時間：40:00\n",
        )?;
        fs::write(base.join("logs/notes.md"), "undated scratch file\n")?;
        fs::write(
            base.join("README.md"),
            "# My runs\n\nintro text\n\n<!-- SUMMARY_START -->\n<!-- SUMMARY_END -->\n\n<!-- RECORD_LIST_START -->\n<!-- RECORD_LIST_END -->\n\nfooter\n",
        )?;
        Ok(())
    }

    #[test]
    fn test_update__rewrites_marker_regions() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        write_fixture(temp_dir.path())?;

        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.current_dir(temp_dir.path()).arg("--no-config");

        cmd.assert().success();

        let readme = fs::read_to_string(temp_dir.path().join("README.md"))?;
        assert!(readme.contains("- **2025年07月**: 距離 **18.7 km**"));
        assert!(readme.contains("時間 **1時間25分**"));
        assert!(readme.contains("<a href=\"logs/2025-07-30-01.md\">2025年07月30日 (01)</a>"));
        // Undated files never appear in the listing
        assert!(!readme.contains("notes.md"));
        // Text outside the marker pairs survives
        assert!(readme.starts_with("# My runs\n\nintro text\n"));
        assert!(readme.ends_with("footer\n"));
        Ok(())
    }

    #[test]
    fn test_update__is_idempotent_across_runs() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        write_fixture(temp_dir.path())?;

        Command::cargo_bin(NAME)?
            .current_dir(temp_dir.path())
            .arg("--no-config")
            .assert()
            .success();
        let first = fs::read_to_string(temp_dir.path().join("README.md"))?;

        Command::cargo_bin(NAME)?
            .current_dir(temp_dir.path())
            .arg("--no-config")
            .assert()
            .success()
            .stdout(contains("already up to date"));
        let second = fs::read_to_string(temp_dir.path().join("README.md"))?;

        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn test_update__weekly_region() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::create_dir_all(base.join("logs"))?;
        // Same ISO week (2025-W31): Tue 07-29 and Wed 07-30
        fs::write(base.join("logs/2025-07-29.md"), "- 距離：5.0km\n- 時間：30:00\n")?;
        fs::write(base.join("logs/2025-07-30.md"), "- 距離：8.2km\n- 時間：45:00\n")?;
        fs::write(
            base.join("README.md"),
            "<!-- SUMMARY_START -->\n<!-- SUMMARY_END -->\n<!-- WEEKLY_SUMMARY_START -->\n<!-- WEEKLY_SUMMARY_END -->\n<!-- RECORD_LIST_START -->\n<!-- RECORD_LIST_END -->\n",
        )?;

        Command::cargo_bin(NAME)?
            .current_dir(base)
            .arg("--no-config")
            .arg("--weekly")
            .assert()
            .success();

        let readme = fs::read_to_string(base.join("README.md"))?;
        assert!(readme.contains("- **2025-W31** (07/28〜08/03)"));
        assert!(readme.contains("距離 **13.2 km**"));
        assert!(readme.contains("最長 **8.2 km**（07/30）"));
        Ok(())
    }

    #[test]
    fn test_update__flat_record_list_style() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        write_fixture(temp_dir.path())?;

        Command::cargo_bin(NAME)?
            .current_dir(temp_dir.path())
            .arg("--no-config")
            .arg("--record-list")
            .arg("flat")
            .assert()
            .success();

        let readme = fs::read_to_string(temp_dir.path().join("README.md"))?;
        assert!(readme.contains("- [2025年07月30日 (01)](logs/2025-07-30-01.md)"));
        assert!(readme.contains("- [2025年07月12日](logs/2025-07-12.md)"));
        assert!(!readme.contains("<details"));
        Ok(())
    }

    #[test]
    fn test_update__bootstraps_missing_markers() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::create_dir_all(base.join("logs"))?;
        fs::write(base.join("logs/2025-07-30.md"), "- 距離：10.5km\n- 時間：45:13\n")?;
        fs::write(base.join("README.md"), "# My runs\n")?;

        Command::cargo_bin(NAME)?
            .current_dir(base)
            .arg("--no-config")
            .assert()
            .success();

        let readme = fs::read_to_string(base.join("README.md"))?;
        assert!(readme.contains("## 📊 月間サマリー"));
        assert!(readme.contains("<!-- SUMMARY_START -->"));
        assert!(readme.contains("<!-- SUMMARY_END -->"));
        assert!(readme.ends_with("# My runs\n"));
        Ok(())
    }

    #[test]
    fn test_update__custom_markers_from_config_file() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::create_dir_all(base.join("logs"))?;
        fs::write(base.join("logs/2025-07-30.md"), "- 距離：10.5km\n- 時間：45:13\n")?;
        fs::write(
            base.join("README.md"),
            "<!-- S -->\n<!-- /S -->\n<!-- R -->\n<!-- /R -->\n",
        )?;
        fs::write(
            base.join("runlog.toml"),
            "summary_start_marker = \"<!-- S -->\"\nsummary_end_marker = \"<!-- /S -->\"\nrecord_list_start_marker = \"<!-- R -->\"\nrecord_list_end_marker = \"<!-- /R -->\"\n",
        )?;

        Command::cargo_bin(NAME)?
            .current_dir(base)
            .arg("--config")
            .arg("runlog.toml")
            .assert()
            .success();

        let readme = fs::read_to_string(base.join("README.md"))?;
        assert!(readme.contains("<!-- S -->\n- **2025年07月**"));
        assert!(readme.contains("<!-- R -->\n<details open>"));
        Ok(())
    }

    #[test]
    fn test_update__missing_logs_dir_fails() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        fs::write(temp_dir.path().join("README.md"), "# My runs\n")?;

        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.current_dir(temp_dir.path()).arg("--no-config");

        cmd.assert().failure().stderr(contains("Error:"));
        Ok(())
    }

    #[test]
    fn test_update__missing_readme_fails() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        fs::create_dir_all(temp_dir.path().join("logs"))?;

        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.current_dir(temp_dir.path()).arg("--no-config");

        cmd.assert()
            .failure()
            .stderr(contains("File not found: README.md"));
        Ok(())
    }

    #[test]
    fn test_update__malformed_fields_degrade_to_zero() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::create_dir_all(base.join("logs"))?;
        fs::write(
            base.join("logs/2025-07-30.md"),
            "- 距離：ten point five km\n- 時間：later\n",
        )?;
        fs::write(
            base.join("README.md"),
            "<!-- SUMMARY_START -->\n<!-- SUMMARY_END -->\n<!-- RECORD_LIST_START -->\n<!-- RECORD_LIST_END -->\n",
        )?;

        Command::cargo_bin(NAME)?
            .current_dir(base)
            .arg("--no-config")
            .assert()
            .success();

        let readme = fs::read_to_string(base.join("README.md"))?;
        assert!(readme.contains("距離 **0.0 km**"));
        assert!(readme.contains("平均ペース **N/A**"));
        Ok(())
    }

    #[test]
    fn test_migrate__dry_run_writes_nothing() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::create_dir_all(base.join("logs"))?;
        fs::write(base.join("logs/run.md"), "just a note\n")?;

        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.current_dir(base)
            .arg("--no-config")
            .arg("migrate")
            .arg("--dry-run");

        cmd.assert()
            .success()
            .stdout(contains("DRY-RUN: COPY"))
            .stdout(contains("Dry run only. No files were written."));

        assert!(!base.join("_logs").exists());
        Ok(())
    }

    #[test]
    fn test_migrate__collision_appends_suffix() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::create_dir_all(base.join("logs"))?;
        fs::write(base.join("logs/run.md"), "first\n")?;

        Command::cargo_bin(NAME)?
            .current_dir(base)
            .arg("--no-config")
            .arg("migrate")
            .assert()
            .success()
            .stdout(contains("Migrated: 1"));

        // A second pass collides with the already-migrated file
        Command::cargo_bin(NAME)?
            .current_dir(base)
            .arg("--no-config")
            .arg("migrate")
            .assert()
            .success();

        let entries: Vec<String> = fs::read_dir(base.join("_logs"))?
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();

        assert_eq!(entries.len(), 2);
        assert!(entries.iter().any(|n| n.ends_with("-run.md")));
        assert!(entries.iter().any(|n| n.ends_with("-run-1.md")));
        Ok(())
    }

    #[test]
    fn test_migrate__move_removes_source() -> TestResult {
        let temp_dir = tempfile::tempdir()?;
        let base = temp_dir.path();
        fs::create_dir_all(base.join("logs"))?;
        fs::write(base.join("logs/2025-07-30.md"), "# run\nbody\n")?;

        Command::cargo_bin(NAME)?
            .current_dir(base)
            .arg("--no-config")
            .arg("migrate")
            .arg("--move")
            .assert()
            .success();

        assert!(!base.join("logs/2025-07-30.md").exists());
        let migrated = fs::read_to_string(base.join("_logs/2025-07-30.md"))?;
        assert!(migrated.starts_with("---\ntitle: run\ndate: 2025-07-30\n---\n\n"));
        Ok(())
    }

    #[test]
    fn test_completion_generate_bash() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.arg("completion-generate").arg("bash");

        cmd.assert().success().stdout(contains("runlog"));
        Ok(())
    }

    #[test]
    fn test_invalid_record_list_style_is_rejected() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;
        cmd.arg("--record-list").arg("fancy");

        cmd.assert().failure();
        Ok(())
    }
}
