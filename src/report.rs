use std::{fs::create_dir_all, io, path::Path};

use log::info;

use crate::{data::merged::MergedTable, error::ScResult};

pub mod plot;

pub fn write_merged_csv<W: io::Write>(merged: &MergedTable, writer: W) -> ScResult<()> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(merged.column_names())?;
    for row in merged.rows()? {
        writer.write_record(&row)?;
    }
    writer.flush()?;

    Ok(())
}

pub fn write_merged_csv_file(merged: &MergedTable, path: &Path) -> ScResult<()> {
    if let Some(dir) = path.parent() {
        create_dir_all(dir)?;
    }

    let file = std::fs::File::create(path)?;
    write_merged_csv(merged, io::BufWriter::new(file))?;
    info!("Wrote {} merged rows to {}", merged.len(), path.to_string_lossy());

    Ok(())
}

pub fn write_plot(merged: &MergedTable, path: &Path, options: &plot::PlotOptions) -> ScResult<()> {
    if let Some(dir) = path.parent() {
        create_dir_all(dir)?;
    }

    plot::draw_scatter(path, &merged.points()?, options)?;
    info!("Wrote scatter plot to {}", path.to_string_lossy());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::{news::NewsTable, stock::StockTable},
        sentiment::LexiconScorer,
    };

    fn merged() -> MergedTable {
        let stock = StockTable::from_reader(
            "Date,Close,Volume\n2021-01-01,100,5\n2021-01-02,110,6\n2021-01-03,99,7\n".as_bytes(),
        )
        .unwrap();
        let daily = NewsTable::from_reader(
            "Date,Headline\n2021-01-02,great\n2021-01-03,bad\n2021-01-03,good\n".as_bytes(),
        )
        .unwrap()
        .score(&LexiconScorer)
        .unwrap()
        .aggregate_daily()
        .unwrap();

        MergedTable::join(&stock, &daily).unwrap()
    }

    #[test]
    fn test_write_merged_csv() {
        let mut buffer: Vec<u8> = vec![];
        write_merged_csv(&merged(), &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Date,Close,Volume,Daily_Return,Sentiment");
        assert_eq!(lines[1], "2021-01-02,110,6,0.1,0.8");
        assert!(lines[2].starts_with("2021-01-03,99,7,-0.1,"));
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_write_merged_csv_deterministic() {
        let mut first: Vec<u8> = vec![];
        let mut second: Vec<u8> = vec![];
        write_merged_csv(&merged(), &mut first).unwrap();
        write_merged_csv(&merged(), &mut second).unwrap();

        assert_eq!(first, second);
    }
}
