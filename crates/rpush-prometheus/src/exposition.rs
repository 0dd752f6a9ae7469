use rpush_model::SnapshotRecord;

use crate::{
    error::RenderError,
    timestamp::{LocalZone, epoch_seconds},
};

pub const METRIC_NAME: &str = "restic_last_snapshot";

/// Rendered text exposition, ready to be used as a request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exposition(String);

impl Exposition {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_body(self) -> String {
        self.0
    }

    /// Payload indented for a multi-line log record.
    pub fn log_view(&self) -> String {
        self.0.trim().replace('\n', "\n\t")
    }
}

/// Turns snapshot records into `restic_last_snapshot` samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    zone: LocalZone,
}

impl Renderer {
    pub fn new(zone: LocalZone) -> Self {
        Self { zone }
    }

    /// Render the type header followed by one sample per record, in input order.
    pub fn render(&self, records: &[SnapshotRecord]) -> Result<Exposition, RenderError> {
        let mut out = format!("# TYPE {METRIC_NAME} counter\n");
        for rec in records {
            out.push_str(&self.sample(rec)?);
        }
        Ok(Exposition(out))
    }

    fn sample(&self, rec: &SnapshotRecord) -> Result<String, RenderError> {
        let ts = epoch_seconds(&rec.time, self.zone)?;
        let paths = sorted_joined(&rec.paths);

        let line = if rec.has_tags() {
            let tags = sorted_joined(&rec.tags);
            format!(
                "{METRIC_NAME}{{hostname=\"{}\",username=\"{}\",paths=\"{paths}\",tags=\"{tags}\"}} {ts}\n",
                rec.hostname, rec.username
            )
        } else {
            format!(
                "{METRIC_NAME}{{hostname=\"{}\",username=\"{}\",paths=\"{paths}\"}} {ts}\n",
                rec.hostname, rec.username
            )
        };
        Ok(line)
    }
}

fn sorted_joined(values: &[String]) -> String {
    let mut sorted: Vec<&str> = values.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::UtcOffset;

    const HEADER: &str = "# TYPE restic_last_snapshot counter\n";

    fn utc() -> Renderer {
        Renderer::new(LocalZone::Fixed(UtcOffset::UTC))
    }

    fn record() -> SnapshotRecord {
        SnapshotRecord::new("backup01", "root", "2024-03-01T10:15:30.123456")
            .with_paths(["/srv", "/etc", "/home"])
    }

    /// Label block of a sample line, split into `(key, value)` pairs.
    fn labels(line: &str) -> Vec<(String, String)> {
        let start = line.find('{').unwrap() + 1;
        let end = line.rfind('}').unwrap();
        let mut out = Vec::new();
        let mut rest = &line[start..end];
        while !rest.is_empty() {
            let (key, tail) = rest.split_once("=\"").unwrap();
            let (value, tail) = tail.split_once('"').unwrap();
            out.push((key.to_string(), value.to_string()));
            rest = tail.strip_prefix(',').unwrap_or(tail);
        }
        out
    }

    #[test]
    fn empty_list_renders_header_only() {
        let exp = utc().render(&[]).unwrap();
        assert_eq!(exp.as_str(), HEADER);
    }

    #[test]
    fn untagged_snapshot_has_three_labels() {
        let exp = utc().render(&[record()]).unwrap();
        assert_eq!(
            exp.as_str(),
            format!(
                "{HEADER}restic_last_snapshot{{hostname=\"backup01\",username=\"root\",paths=\"/etc,/home,/srv\"}} 1709288130\n"
            )
        );

        let line = exp.as_str().lines().nth(1).unwrap();
        let keys: Vec<_> = labels(line).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["hostname", "username", "paths"]);
        assert!(!line.contains("tags="));
    }

    #[test]
    fn tagged_snapshot_has_sorted_tags_with_duplicates() {
        let rec = record().with_tags(["weekly", "db", "daily", "db"]);
        let exp = utc().render(&[rec]).unwrap();
        assert_eq!(
            exp.as_str(),
            format!(
                "{HEADER}restic_last_snapshot{{hostname=\"backup01\",username=\"root\",paths=\"/etc,/home,/srv\",tags=\"daily,db,db,weekly\"}} 1709288130\n"
            )
        );
    }

    #[test]
    fn label_values_round_trip_sorted_sets() {
        let rec = record().with_tags(["z", "a", "m"]);
        let exp = utc().render(std::slice::from_ref(&rec)).unwrap();
        let line = exp.as_str().lines().nth(1).unwrap();

        let parsed = labels(line);
        let get = |key: &str| {
            parsed
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .unwrap()
        };

        let mut paths = rec.paths.clone();
        paths.sort();
        let mut tags = rec.tags.clone();
        tags.sort();

        assert_eq!(get("hostname"), rec.hostname);
        assert_eq!(get("username"), rec.username);
        assert_eq!(get("paths").split(',').collect::<Vec<_>>(), paths);
        assert_eq!(get("tags").split(',').collect::<Vec<_>>(), tags);
    }

    #[test]
    fn empty_paths_render_as_empty_value() {
        let rec = SnapshotRecord::new("h", "u", "2024-03-01T10:15:30");
        let exp = utc().render(&[rec]).unwrap();
        assert!(exp.as_str().contains("paths=\"\"} 1709288130\n"));
    }

    #[test]
    fn records_keep_input_order() {
        let recs = vec![
            SnapshotRecord::new("zulu", "u", "2024-03-01T10:15:30"),
            SnapshotRecord::new("alpha", "u", "2024-03-01T10:15:31"),
        ];
        let exp = utc().render(&recs).unwrap();
        let hosts: Vec<_> = exp
            .as_str()
            .lines()
            .skip(1)
            .map(|l| labels(l)[0].1.clone())
            .collect();
        assert_eq!(hosts, vec!["zulu", "alpha"]);
    }

    #[test]
    fn label_values_are_not_escaped() {
        let rec = SnapshotRecord::new("h", "u", "2024-03-01T10:15:30").with_paths([r"C:\data"]);
        let exp = utc().render(&[rec]).unwrap();
        assert!(exp.as_str().contains(r#"paths="C:\data""#));
    }

    #[test]
    fn invalid_time_aborts_rendering() {
        let recs = vec![record(), SnapshotRecord::new("h", "u", "not-a-time")];
        assert_eq!(
            utc().render(&recs),
            Err(RenderError::InvalidTime("not-a-time".into()))
        );
    }

    #[test]
    fn log_view_indents_continuation_lines() {
        let exp = utc().render(&[record(), record()]).unwrap();
        let view = exp.log_view();
        assert!(view.starts_with("# TYPE restic_last_snapshot counter\n\trestic_last_snapshot{"));
        assert!(!view.ends_with('\n'));
        assert_eq!(view.matches("\n\t").count(), 2);
    }
}
