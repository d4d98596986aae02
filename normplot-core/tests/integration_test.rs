use normplot_core::{
    generate_report, parse_sample, BinSet, BuildHookRequest, Config, DensityProfile,
    FormRequest, NormplotError, PageGeometry, RenderConfig, ReportRequest, Sample, ToSample,
};
use tempfile::TempDir;

fn one_two_three() -> Sample {
    Sample::new(vec![1.0, 2.0, 3.0]).unwrap()
}

fn file_names(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn one_two_three_scenario() {
    let sample = one_two_three();
    let bins = BinSet::from_sample(&sample).unwrap();
    assert_eq!(bins.edges, vec![1, 2, 3, 4]);
    assert_eq!(bins.centers, vec![1.5, 2.5, 3.5]);
    let density = DensityProfile::fit(&sample, &bins).unwrap();
    assert!((density.mean - 2.0).abs() < 1e-12);
    assert!(density.std_dev > 0.0);
    assert!((density.values.iter().sum::<f64>() - 1.0).abs() < 1e-9);

    let tmp = TempDir::new().unwrap();
    let summary = generate_report(&sample, tmp.path(), "report.pdf", &RenderConfig::default()).unwrap();
    assert!(summary.path.is_absolute());
    assert_eq!(summary.path, tmp.path().join("report.pdf").canonicalize().unwrap());
    let bytes = std::fs::read(&summary.path).unwrap();
    assert!(!bytes.is_empty());
    assert!(bytes.starts_with(b"%PDF-"));
    assert_eq!(bytes.len() as u64, summary.bytes);
    assert_eq!(summary.bins, 3);
    assert_eq!(file_names(tmp.path()), vec!["report.pdf"]);
}

#[test]
fn rendering_twice_is_identical() {
    let sample = Sample::new(vec![0.5, 2.25, 2.75, 4.0, 7.5]).unwrap();
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    let cfg = RenderConfig::default();
    let ra = generate_report(&sample, a.path(), "report.pdf", &cfg).unwrap();
    let rb = generate_report(&sample, b.path(), "report.pdf", &cfg).unwrap();
    assert_eq!(ra.bytes, rb.bytes);
    assert_eq!(std::fs::read(&ra.path).unwrap(), std::fs::read(&rb.path).unwrap());

    let bins = BinSet::from_sample(&sample).unwrap();
    let density = DensityProfile::fit(&sample, &bins).unwrap();
    assert_eq!(
        PageGeometry::layout(&bins, &density, &cfg),
        PageGeometry::layout(&bins, &density, &cfg)
    );
}

#[test]
fn rerun_overwrites_in_place() {
    let tmp = TempDir::new().unwrap();
    let cfg = RenderConfig::default();
    generate_report(&one_two_three(), tmp.path(), "report.pdf", &cfg).unwrap();
    let wide = Sample::new(vec![0.0, 5.0, 10.0, 20.0]).unwrap();
    let second = generate_report(&wide, tmp.path(), "report.pdf", &cfg).unwrap();
    assert_eq!(second.bins, 21);
    assert_eq!(file_names(tmp.path()), vec!["report.pdf"]);
}

#[test]
fn text_path_matches_direct_path() {
    let tmp = TempDir::new().unwrap();
    let cfg = Config::default();
    let parsed = parse_sample("1,2,3").unwrap();
    assert_eq!(parsed.values(), &[1.0, 2.0, 3.0]);

    let form = FormRequest::new("1,2,3", tmp.path().join("form")).run(&cfg).unwrap();
    let direct = BuildHookRequest::new(one_two_three(), tmp.path().join("hook"), &cfg)
        .run(&cfg)
        .unwrap();
    assert_eq!(form.path.file_name(), direct.path.file_name());
    assert!(direct.path.ends_with("pdf/report.pdf"));
    assert_eq!(std::fs::read(&form.path).unwrap(), std::fs::read(&direct.path).unwrap());
}

#[test]
fn bad_text_is_rejected_without_output() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("form");
    let err = FormRequest::new("1,a,3", &out).run(&Config::default()).unwrap_err();
    assert!(matches!(err, NormplotError::Parse { ref token, position: 1 } if token == "a"));
    assert!(!out.exists());
}

#[test]
fn empty_and_constant_samples() {
    let empty: Vec<f64> = Vec::new();
    assert!(matches!(empty.to_sample(), Err(NormplotError::InvalidSample(_))));

    let tmp = TempDir::new().unwrap();
    let constant = [3, 3, 3].to_sample().unwrap();
    let err = generate_report(&constant, tmp.path(), "report.pdf", &RenderConfig::default()).unwrap_err();
    assert!(matches!(err, NormplotError::DegenerateDistribution(_)));
    assert!(file_names(tmp.path()).is_empty());
}

#[test]
fn custom_file_name_from_config() {
    let tmp = TempDir::new().unwrap();
    let mut cfg = Config::default();
    cfg.output.file_name = "histogram.pdf".into();
    let summary = FormRequest::new("4, 5, 6, 6", tmp.path()).run(&cfg).unwrap();
    assert!(summary.path.ends_with("histogram.pdf"));
}
