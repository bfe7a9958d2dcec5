use chrono::NaiveDate;
use donation_register_backend::{DonationRegister, FixedClock};
use shared::{DraftField, FormMode, TypeFilter};

fn create_register() -> DonationRegister<FixedClock> {
    DonationRegister::with_clock(FixedClock(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()))
}

fn add_money(
    register: &mut DonationRegister<FixedClock>,
    name: &str,
    amount: &str,
    date: &str,
) -> u64 {
    register.update_draft_field(DraftField::DonorName, name);
    register.update_draft_field(DraftField::DonationType, "Money");
    register.update_draft_field(DraftField::DonationAmount, amount);
    register.update_draft_field(DraftField::DonationDate, date);
    register.submit_draft().expect("valid money draft")
}

fn add_items(
    register: &mut DonationRegister<FixedClock>,
    name: &str,
    kind: &str,
    qty: &str,
) -> u64 {
    register.update_draft_field(DraftField::DonorName, name);
    register.update_draft_field(DraftField::DonationType, kind);
    register.update_draft_field(DraftField::DonationQty, qty);
    register.submit_draft().expect("valid item draft")
}

#[test]
fn n_adds_produce_n_records_and_ids() {
    let mut register = create_register();

    for n in 0..25u64 {
        let id = if n % 3 == 0 {
            add_items(&mut register, &format!("Donor {}", n), "Food", "1")
        } else {
            add_money(&mut register, &format!("Donor {}", n), "1.25", "2024-02-02")
        };
        assert_eq!(id, n);
    }

    assert_eq!(register.total_count(), 25);
    assert_eq!(register.next_id(), 25);
    assert_eq!(register.edit_target_id(), 25);
}

#[test]
fn ids_are_never_reused_after_delete() {
    let mut register = create_register();
    add_money(&mut register, "Alice", "1", "2024-01-01");
    add_money(&mut register, "Bob", "2", "2024-01-01");

    register.delete_record(1);
    let id = add_money(&mut register, "Carol", "3", "2024-01-01");

    assert_eq!(id, 2);
    assert_eq!(register.records().keys().copied().collect::<Vec<_>>(), vec![0, 2]);
}

#[test]
fn delete_twice_is_a_no_op() {
    let mut register = create_register();
    add_money(&mut register, "Alice", "10", "2024-01-01");

    assert!(register.delete_record(0).is_some());
    assert!(register.delete_record(0).is_none());
    assert_eq!(register.total_count(), 0);
    assert_eq!(register.next_id(), 1);
}

#[test]
fn edit_then_submit_without_changes_keeps_record() {
    let mut register = create_register();
    add_money(&mut register, "Alice", "10", "2024-01-01");
    add_items(&mut register, "Bob", "Clothing", "7");

    for id in [0, 1] {
        let before = register.get(id).cloned().unwrap();

        register.start_edit(id).unwrap();
        assert_eq!(register.mode(), FormMode::Edit);
        register.submit_draft().unwrap();

        assert_eq!(register.get(id), Some(&before));
        assert_eq!(register.total_count(), 2);
        assert_eq!(register.next_id(), 2);
        assert_eq!(register.mode(), FormMode::Add);
    }
}

#[test]
fn stats_ignore_the_type_filter() {
    let mut register = create_register();
    add_money(&mut register, "Alice", "10", "2024-01-01");
    add_items(&mut register, "Bob", "Food", "3");
    add_money(&mut register, "Carol", "4.55", "2024-01-03");

    for filter in TypeFilter::ALL {
        register.set_type_filter(filter);
        assert_eq!(register.total_count(), 3);
        assert_eq!(register.total_money_amount(), "14.55");
    }
}

#[test]
fn single_money_donation_scenario() {
    let mut register = create_register();

    add_money(&mut register, "Alice", "10", "2024-01-01");

    assert_eq!(register.total_count(), 1);
    assert_eq!(register.total_money_amount(), "10.00");
    let record = register.get(0).unwrap();
    assert_eq!(record.donation_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
}

#[test]
fn food_is_excluded_from_money_total() {
    let mut register = create_register();

    add_money(&mut register, "Alice", "10.00", "2024-01-01");
    add_items(&mut register, "Bob", "Food", "3");

    assert_eq!(register.total_count(), 2);
    assert_eq!(register.total_money_amount(), "10.00");
}

#[test]
fn deleting_first_of_two_leaves_second() {
    let mut register = create_register();
    let first = add_money(&mut register, "Alice", "10", "2024-01-01");
    let second = add_items(&mut register, "Bob", "Food", "3");

    register.delete_record(first);
    register.set_type_filter(TypeFilter::All);

    let remaining: Vec<_> = register.filtered_records().collect();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].0, second);
    assert_eq!(remaining[0].1.donor_name, "Bob");
}

#[test]
fn clothing_filter_with_no_clothing_is_empty() {
    let mut register = create_register();
    add_money(&mut register, "Alice", "10", "2024-01-01");
    add_items(&mut register, "Bob", "Food", "3");

    register.set_type_filter(TypeFilter::Clothing);

    assert_eq!(register.filtered_records().count(), 0);
    assert_eq!(register.total_count(), 2);
}

#[test]
fn filtered_records_follow_insertion_order_after_edits() {
    let mut register = create_register();
    add_money(&mut register, "Alice", "1", "2024-01-01");
    add_money(&mut register, "Bob", "2", "2024-01-01");
    add_money(&mut register, "Carol", "3", "2024-01-01");

    register.start_edit(0).unwrap();
    register.update_draft_field(DraftField::DonorName, "Alicia");
    register.submit_draft().unwrap();

    let names: Vec<_> = register
        .filtered_records()
        .map(|(_, record)| record.donor_name.as_str())
        .collect();
    assert_eq!(names, vec!["Alicia", "Bob", "Carol"]);
}
