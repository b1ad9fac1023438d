use crate::scan::ResultRow;
use anyhow::{Context, Result, anyhow};
use std::io::Write;

/// Consumer of a report: one header, then rows, then an end marker.
pub trait ReportSink {
    fn write_header(&mut self, decay_steps: &[f64]) -> Result<()>;
    fn write_row(&mut self, row: &ResultRow) -> Result<()>;
    fn finish(self) -> Result<()>
    where
        Self: Sized;
}

/// Comma-separated report terminated by an empty line.
pub struct CsvReport<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvReport<W> {
    pub fn new(out: W) -> Self {
        let writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(out);
        Self { writer }
    }
}

impl<W: Write> ReportSink for CsvReport<W> {
    fn write_header(&mut self, decay_steps: &[f64]) -> Result<()> {
        let mut header = vec!["num_run".to_string(), "avg".to_string(), "linavg".to_string()];
        header.extend(decay_steps.iter().map(|step| format!("exp-avg({step})")));
        self.writer
            .write_record(&header)
            .context("failed to write header")?;
        Ok(())
    }

    fn write_row(&mut self, row: &ResultRow) -> Result<()> {
        let mut record = vec![row.idx.to_string(), row.avg.to_string(), row.lin_avg.to_string()];
        record.extend(row.exp_avgs.iter().map(|val| val.to_string()));
        self.writer
            .write_record(&record)
            .with_context(|| format!("failed to write row {}", row.idx))?;
        Ok(())
    }

    fn finish(mut self) -> Result<()> {
        self.writer.flush().context("failed to flush report")?;
        let mut out = self
            .writer
            .into_inner()
            .map_err(|_| anyhow!("failed to recover report writer"))?;
        writeln!(out).context("failed to write end of report")?;
        out.flush().context("failed to flush writer stream")?;
        Ok(())
    }
}

/// Write a complete report and return the number of rows written.
pub fn write_report<S, I>(mut sink: S, decay_steps: &[f64], rows: I) -> Result<usize>
where
    S: ReportSink,
    I: IntoIterator<Item = ResultRow>,
{
    sink.write_header(decay_steps)?;
    let mut n_rows = 0;
    for row in rows {
        sink.write_row(&row)?;
        n_rows += 1;
    }
    sink.finish()?;
    Ok(n_rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<ResultRow> {
        vec![
            ResultRow {
                idx: 0,
                avg: 2.0,
                lin_avg: 2.5,
                exp_avgs: vec![0.75, 1.5],
            },
            ResultRow {
                idx: 1,
                avg: 3.0,
                lin_avg: 3.25,
                exp_avgs: vec![1.0, 2.0],
            },
        ]
    }

    #[test]
    fn csv_layout() {
        let mut buf = Vec::new();
        let n_rows = write_report(CsvReport::new(&mut buf), &[0.1, 0.5], rows()).unwrap();
        assert_eq!(n_rows, 2);

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "num_run,avg,linavg,exp-avg(0.1),exp-avg(0.5)\n\
             0,2,2.5,0.75,1.5\n\
             1,3,3.25,1,2\n\
             \n"
        );
    }

    #[test]
    fn empty_report_still_has_header_and_terminator() {
        let mut buf = Vec::new();
        let n_rows = write_report(CsvReport::new(&mut buf), &[0.3], Vec::new()).unwrap();
        assert_eq!(n_rows, 0);
        assert_eq!(String::from_utf8(buf).unwrap(), "num_run,avg,linavg,exp-avg(0.3)\n\n");
    }

    struct Collector<'a> {
        header: &'a mut Vec<f64>,
        idxs: &'a mut Vec<usize>,
        finished: &'a mut bool,
    }

    impl ReportSink for Collector<'_> {
        fn write_header(&mut self, decay_steps: &[f64]) -> Result<()> {
            self.header.extend_from_slice(decay_steps);
            Ok(())
        }

        fn write_row(&mut self, row: &ResultRow) -> Result<()> {
            self.idxs.push(row.idx);
            Ok(())
        }

        fn finish(self) -> Result<()> {
            *self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn sink_sees_header_rows_then_finish() {
        let (mut header, mut idxs, mut finished) = (Vec::new(), Vec::new(), false);
        let sink = Collector {
            header: &mut header,
            idxs: &mut idxs,
            finished: &mut finished,
        };
        write_report(sink, &[0.2], rows()).unwrap();
        assert_eq!(header, vec![0.2]);
        assert_eq!(idxs, vec![0, 1]);
        assert!(finished);
    }
}
