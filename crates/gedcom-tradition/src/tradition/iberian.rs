//! Two-surname traditions: each child carries one surname from each parent.
//!
//! Names are written as two slash groups, `Pedro /Garcia/ /Lopez/`, and the
//! SURN piece lists both surnames separated by a comma.

use gedcom_model::{NameRecord, Sex};

use crate::extract::surname_groups;

fn first_group(text: &str) -> &str {
    surname_groups(text).first().copied().unwrap_or("")
}

fn last_group(text: &str) -> &str {
    surname_groups(text).last().copied().unwrap_or("")
}

/// `/<first>/ /<second>/` with `SURN <first>,<second>`.
fn two_surnames(first: &str, second: &str) -> Option<Vec<NameRecord>> {
    if first.is_empty() && second.is_empty() {
        return None;
    }
    let surn = format!("{first},{second}");
    Some(vec![
        NameRecord::birth(format!("/{first}/ /{second}/"))
            .with_surname(surn.trim_matches(',')),
    ])
}

/// Select the child's `index`-th surname group, if present and non-empty.
fn child_group(child: &str, index: usize) -> Option<String> {
    surname_groups(child)
        .get(index)
        .filter(|group| !group.is_empty())
        .map(|group| (*group).to_string())
}

/// Father's first surname, then mother's first surname.
pub(super) fn spanish_child(father: &str, mother: &str) -> Option<Vec<NameRecord>> {
    two_surnames(first_group(father), first_group(mother))
}

/// A new father takes the child's first surname, a new mother the second.
pub(super) fn spanish_parent(child: &str, sex: Sex) -> Option<Vec<NameRecord>> {
    let surname = match sex {
        Sex::Male => child_group(child, 0)?,
        Sex::Female => child_group(child, 1)?,
        Sex::Other | Sex::Unknown => return None,
    };
    Some(vec![
        NameRecord::birth(format!("/{surname}/ //")).with_surname(surname),
    ])
}

/// Mother's last surname, then father's last surname.
pub(super) fn portuguese_child(father: &str, mother: &str) -> Option<Vec<NameRecord>> {
    two_surnames(last_group(mother), last_group(father))
}

/// A new father takes the child's second surname, a new mother the first.
pub(super) fn portuguese_parent(child: &str, sex: Sex) -> Option<Vec<NameRecord>> {
    let surname = match sex {
        Sex::Male => child_group(child, 1)?,
        Sex::Female => child_group(child, 0)?,
        Sex::Other | Sex::Unknown => return None,
    };
    Some(vec![
        NameRecord::birth(format!("// /{surname}/")).with_surname(surname),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(records: Option<Vec<NameRecord>>) -> Vec<String> {
        records
            .unwrap_or_default()
            .iter()
            .map(NameRecord::render)
            .collect()
    }

    #[test]
    fn test_spanish_child() {
        assert_eq!(
            render(spanish_child("Gabriel /Garcia/ /Iglesias/", "Maria /Ruiz/ /Lorca/")),
            vec!["1 NAME /Garcia/ /Ruiz/\n2 TYPE BIRTH\n2 SURN Garcia,Ruiz"]
        );
        assert_eq!(
            render(spanish_child("Gabriel /Garcia/", "")),
            vec!["1 NAME /Garcia/ //\n2 TYPE BIRTH\n2 SURN Garcia"]
        );
        assert!(spanish_child("", "Maria").is_none());
    }

    #[test]
    fn test_spanish_parent() {
        let child = "Pedro /Garcia/ /Ruiz/";
        assert_eq!(
            render(spanish_parent(child, Sex::Male)),
            vec!["1 NAME /Garcia/ //\n2 TYPE BIRTH\n2 SURN Garcia"]
        );
        assert_eq!(
            render(spanish_parent(child, Sex::Female)),
            vec!["1 NAME /Ruiz/ //\n2 TYPE BIRTH\n2 SURN Ruiz"]
        );
        assert!(spanish_parent(child, Sex::Unknown).is_none());
        assert!(spanish_parent("Pedro /Garcia/", Sex::Female).is_none());
    }

    #[test]
    fn test_portuguese() {
        assert_eq!(
            render(portuguese_child("Gabriel /Garcia/ /Iglesias/", "Maria /Ruiz/ /Lorca/")),
            vec!["1 NAME /Lorca/ /Iglesias/\n2 TYPE BIRTH\n2 SURN Lorca,Iglesias"]
        );
        let child = "Pedro /Lorca/ /Iglesias/";
        assert_eq!(
            render(portuguese_parent(child, Sex::Male)),
            vec!["1 NAME // /Iglesias/\n2 TYPE BIRTH\n2 SURN Iglesias"]
        );
        assert_eq!(
            render(portuguese_parent(child, Sex::Female)),
            vec!["1 NAME // /Lorca/\n2 TYPE BIRTH\n2 SURN Lorca"]
        );
    }
}
