use crate::domain::model::{Population, PrefectureTable, BASE_YEAR, TARGET_YEAR};
use crate::utils::error::Result;
use csv::{ReaderBuilder, StringRecord};

const YEAR_COLUMN: usize = 0;
const PREFECTURE_COLUMN: usize = 1;
const POPULATION_COLUMN: usize = 3;

/// Slice out the leading `[sign]digits` of a field, skipping leading
/// whitespace. Anything after the digits is ignored.
fn leading_digits(field: &str) -> Option<&str> {
    let trimmed = field.trim_start();
    let unsigned = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);
    let digits = unsigned
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(unsigned.len());

    if digits == 0 {
        return None;
    }

    let sign_len = trimmed.len() - unsigned.len();
    Some(&trimmed[..sign_len + digits])
}

/// Read an integer the lenient way: skip leading whitespace, accept one sign,
/// then take the longest run of ASCII digits, so `"2010年"` reads as 2010.
/// No digits (or overflow) gives `None`.
pub fn parse_leading_int(field: &str) -> Option<i64> {
    leading_digits(field)?.parse::<i64>().ok()
}

/// Same leniency as [`parse_leading_int`], but a digit run too long for `i64`
/// is kept as the nearest `f64` instead of being dropped.
pub fn parse_population(field: Option<&str>) -> Population {
    match field.and_then(leading_digits) {
        Some(digits) => match digits.parse::<i64>() {
            Ok(n) => Population::Count(n),
            Err(_) => digits
                .parse::<f64>()
                .map(Population::Approx)
                .unwrap_or(Population::NotANumber),
        },
        None => Population::NotANumber,
    }
}

/// 將一筆人口推移資料存入集計表。年份不是 2010 或 2015 的行不影響狀態。
/// Returns whether the record touched the table.
pub fn parse_record(table: &mut PrefectureTable, record: &StringRecord) -> bool {
    let year = record.get(YEAR_COLUMN).and_then(parse_leading_int);
    let prefecture = record.get(PREFECTURE_COLUMN).unwrap_or("");
    let popu = parse_population(record.get(POPULATION_COLUMN));

    match year {
        Some(BASE_YEAR) => {
            table.entry_mut(prefecture).popu_2010 = popu;
            true
        }
        Some(TARGET_YEAR) => {
            table.entry_mut(prefecture).popu_2015 = popu;
            true
        }
        _ => false,
    }
}

/// Parse one raw line, splitting on bare commas.
pub fn parse_line(table: &mut PrefectureTable, line: &str) -> bool {
    let record: StringRecord = line.split(',').collect();
    parse_record(table, &record)
}

/// 逐行讀取 CSV 內容並建立集計表
pub fn read_table(data: &[u8]) -> Result<PrefectureTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(data);

    let mut table = PrefectureTable::new();
    let mut lines = 0usize;
    let mut matched = 0usize;

    // 非 UTF-8 的位元組以 U+FFFD 取代，整行仍照常判斷年份
    for result in reader.byte_records() {
        let record = StringRecord::from_byte_record_lossy(result?);
        lines += 1;
        if parse_record(&mut table, &record) {
            matched += 1;
        }
    }

    tracing::debug!(
        "Read {} lines, {} matched {}/{}, {} prefectures",
        lines,
        matched,
        BASE_YEAR,
        TARGET_YEAR,
        table.len()
    );

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("2010"), Some(2010));
        assert_eq!(parse_leading_int("  2015"), Some(2015));
        assert_eq!(parse_leading_int("2010年"), Some(2010));
        assert_eq!(parse_leading_int("-42"), Some(-42));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999999999999"), None);
    }

    #[test]
    fn test_parse_population() {
        assert_eq!(parse_population(Some("5381733")), Population::Count(5381733));
        assert_eq!(parse_population(Some(" 12人")), Population::Count(12));
        assert_eq!(parse_population(Some("n/a")), Population::NotANumber);
        assert_eq!(parse_population(None), Population::NotANumber);
        assert_eq!(
            parse_population(Some("99999999999999999999")),
            Population::Approx(1e20)
        );
    }

    #[test]
    fn test_oversized_population_still_ranks() {
        let mut table = PrefectureTable::new();
        parse_line(&mut table, "2010,A,x,10000000000000000000");
        parse_line(&mut table, "2015,A,x,20000000000000000000");

        let a = table.get("A").unwrap();
        assert_eq!(a.popu_2010, Population::Approx(1e19));
        assert_eq!(a.compute_change(), 2.0);
    }

    #[test]
    fn test_parse_line_sets_both_years() {
        let mut table = PrefectureTable::new();
        assert!(parse_line(&mut table, "2010,A,x,100"));
        assert!(parse_line(&mut table, "2015,A,x,150"));

        let a = table.get("A").unwrap();
        assert_eq!(a.popu_2010, Population::Count(100));
        assert_eq!(a.popu_2015, Population::Count(150));
        assert_eq!(a.change, None);
    }

    #[test]
    fn test_other_years_leave_table_untouched() {
        let mut table = PrefectureTable::new();
        for line in ["2005,A,x,90", "2020,A,x,200", "year,prefecture,x,population", ""] {
            assert!(!parse_line(&mut table, line));
        }
        assert!(table.is_empty());
    }

    #[test]
    fn test_later_line_overwrites_same_year() {
        let mut table = PrefectureTable::new();
        parse_line(&mut table, "2010,A,x,100");
        parse_line(&mut table, "2010,A,x,120");
        assert_eq!(table.get("A").unwrap().popu_2010, Population::Count(120));
    }

    #[test]
    fn test_malformed_population_becomes_nan() {
        let mut table = PrefectureTable::new();
        parse_line(&mut table, "2010,A,x,unknown");
        parse_line(&mut table, "2015,B");

        assert_eq!(table.get("A").unwrap().popu_2010, Population::NotANumber);
        assert_eq!(table.get("B").unwrap().popu_2015, Population::NotANumber);
        assert_eq!(table.get("B").unwrap().popu_2010, Population::Count(0));
    }

    #[test]
    fn test_missing_prefecture_uses_empty_key() {
        let mut table = PrefectureTable::new();
        assert!(parse_line(&mut table, "2010"));
        assert_eq!(table.get("").unwrap().popu_2010, Population::NotANumber);
    }

    #[test]
    fn test_read_table_from_csv_bytes() {
        let data = "2010,北海道,a,5506419\r\n\
                    2015,北海道,a,5381733\r\n\
                    \r\n\
                    2010,\"東京都\",a,13159388\n\
                    2015,\"東京都\",a,13515271\n\
                    1995,北海道,a,5692321\n";

        let table = read_table(data.as_bytes()).unwrap();

        assert_eq!(table.len(), 2);
        let hokkaido = table.get("北海道").unwrap();
        assert_eq!(hokkaido.popu_2010, Population::Count(5506419));
        assert_eq!(hokkaido.popu_2015, Population::Count(5381733));
        // 不處理引號，名稱原樣保留
        assert!(table.get("\"東京都\"").is_some());
    }

    #[test]
    fn test_read_table_skips_non_utf8_header() {
        // Shift_JIS 編碼的表頭
        let mut data: Vec<u8> = vec![0x8f, 0x57, 0x8c, 0x76, 0x94, 0x4e];
        data.extend_from_slice(b",x\n2010,A,x,100\n2015,A,x,150\n");

        let table = read_table(&data).unwrap();

        assert_eq!(table.len(), 1);
        let a = table.get("A").unwrap();
        assert_eq!(a.popu_2010, Population::Count(100));
        assert_eq!(a.popu_2015, Population::Count(150));
    }

    #[test]
    fn test_read_table_keeps_replacement_char_in_name() {
        let data: &[u8] = b"2010,\xff\xfeA,x,1\n2015,\xff\xfeA,x,2\n";

        let table = read_table(data).unwrap();

        let entry = table.get("\u{FFFD}\u{FFFD}A").unwrap();
        assert_eq!(entry.popu_2010, Population::Count(1));
        assert_eq!(entry.popu_2015, Population::Count(2));
    }
}
