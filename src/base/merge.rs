use crate::base;

const LEFT_SUFFIX: &str = "_x";
const RIGHT_SUFFIX: &str = "_y";

/// Left outer join of `left` and `right` on `left[left_key] == right[right_key]`.
///
/// Every left row appears in the output, once per matching right row, or once
/// with `Null` right-hand cells when nothing matches. `Null` keys never match.
/// If `right` has no rows, `left` is returned as is.
///
/// Output columns are the left columns followed by the right columns. When
/// both keys share a name the right key is dropped; any other name present on
/// both sides gets an `_x` (left) or `_y` (right) suffix.
pub fn merge(
    left: base::Table,
    right: &base::Table,
    left_key: &str,
    right_key: &str,
) -> Result<base::Table, base::TableError> {
    if right.is_empty() {
        return Ok(left);
    }
    let li = left.index_of(left_key)?;
    let ri = right.index_of(right_key)?;
    let same_key = left_key == right_key;

    // Right column indices that make it into the output.
    let kept = (0..right.columns().len())
        .filter(|&j| !(same_key && j == ri))
        .collect::<Vec<_>>();

    let clashes = |name: &str, among: &[String]| {
        among.iter().any(|c| c == name) && !(same_key && name == left_key)
    };
    let kept_names = kept
        .iter()
        .map(|&j| right.columns()[j].clone())
        .collect::<Vec<_>>();
    let columns = left
        .columns()
        .iter()
        .map(|c| match clashes(c, &kept_names) {
            true => format!("{}{}", c, LEFT_SUFFIX),
            false => c.clone(),
        })
        .chain(kept_names.iter().map(|c| match clashes(c, left.columns()) {
            true => format!("{}{}", c, RIGHT_SUFFIX),
            false => c.clone(),
        }))
        .collect::<Vec<_>>();

    let mut index = std::collections::HashMap::<&base::Value, Vec<usize>>::new();
    for (j, row) in right.rows().enumerate() {
        if !row[ri].is_null() {
            index.entry(&row[ri]).or_default().push(j);
        }
    }
    let right_rows = right.rows().collect::<Vec<_>>();

    let mut out = base::Table::new(columns);
    for row in left.rows() {
        let matches = match row[li].is_null() {
            true => None,
            false => index.get(&row[li]),
        };
        match matches {
            Some(js) => {
                for &j in js {
                    let mut merged = row.to_vec();
                    merged.extend(kept.iter().map(|&k| right_rows[j][k].clone()));
                    out.push(merged);
                }
            }
            None => {
                let mut merged = row.to_vec();
                merged.resize(row.len() + kept.len(), base::Value::Null);
                out.push(merged);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn table(s: &str) -> base::Table {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_right_returns_left() {
        let left = table("UserId\nu1");
        let got = merge(left.clone(), &base::Table::default(), "UserId", "Userid").unwrap();
        assert_eq!(got, left);

        // Header-only right tables count as empty too.
        let got = merge(left.clone(), &table("Userid,Fullname"), "UserId", "Userid").unwrap();
        assert_eq!(got, left);
    }

    #[test]
    fn test_empty_right_skips_key_check() {
        let left = table("a\n1");
        let got = merge(left.clone(), &base::Table::default(), "nope", "nope").unwrap();
        assert_eq!(got, left);
    }

    #[rstest]
    #[case(
        "
            UserId,Operation
            u1,Login
            u2,Login
            u3,Logout
        ",
        "
            Userid,Fullname
            u1,Ann
            u3,Cid
        ",
        "
            UserId,Operation,Userid,Fullname
            u1,Login,u1,Ann
            u2,Login,,
            u3,Logout,u3,Cid
        "
    )]
    #[case(
        "
            UserId,Operation
            u1,Login
            u2,Logout
        ",
        "
            Userid,Fullname
            u1,Ann
            u1,Annie
        ",
        "
            UserId,Operation,Userid,Fullname
            u1,Login,u1,Ann
            u1,Login,u1,Annie
            u2,Logout,,
        "
    )]
    #[case(
        "
            UserId,Operation
            ,Login
            u1,Logout
        ",
        "
            Userid,Fullname
            ,Ghost
            u1,Ann
        ",
        "
            UserId,Operation,Userid,Fullname
            ,Login,,
            u1,Logout,u1,Ann
        "
    )]
    fn test_left_join(#[case] left: &str, #[case] right: &str, #[case] want: &str) {
        let got = merge(table(left), &table(right), "UserId", "Userid").unwrap();
        assert_eq!(got, table(want));
    }

    #[test]
    fn test_never_drops_left_rows() {
        let left = table(
            "
            UserId,Operation
            u1,A
            u2,B
            u3,C
            u4,D
            ",
        );
        let right = table("Userid,Fullname\nzz,Nobody");
        let got = merge(left.clone(), &right, "UserId", "Userid").unwrap();
        assert_eq!(got.len(), left.len());
        assert_eq!(
            got.column("UserId").unwrap().collect::<Vec<_>>(),
            left.column("UserId").unwrap().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_same_key_name_and_clashing_columns() {
        let left = table("UserId,Fullname\nu1,Ann");
        let right = table("UserId,Fullname,Team\nu1,Ann B.,Red");
        let got = merge(left, &right, "UserId", "UserId").unwrap();
        assert_eq!(
            got,
            table(
                "
                UserId,Fullname_x,Fullname_y,Team
                u1,Ann,Ann B.,Red
                "
            )
        );
    }

    #[test]
    fn test_missing_key() {
        let left = table("UserId\nu1");
        let right = table("Userid\nu1");
        assert_eq!(
            merge(left.clone(), &right, "Userid", "Userid"),
            Err(base::TableError::MissingColumn("Userid".into()))
        );
        assert_eq!(
            merge(left, &right, "UserId", "UserId"),
            Err(base::TableError::MissingColumn("UserId".into()))
        );
    }
}
