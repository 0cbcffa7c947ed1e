use rich_text::{attrs, Delta};

#[test]
fn insert_insert() {
    let a1 = Delta::new().insert("A", None).take();
    let b1 = Delta::new().insert("B", None).take();
    let a2 = a1.clone();
    let b2 = b1.clone();
    let expected1 = Delta::new().retain(1, None).insert("B", None).take();
    let expected2 = Delta::new().insert("B", None).take();
    assert_eq!(a1.transform(&b1, true), expected1);
    assert_eq!(a2.transform(&b2, false), expected2);
}

#[test]
fn insert_retain() {
    let a = Delta::new().insert("A", None).take();
    let b = Delta::new()
        .retain(1, Some(attrs! {"bold" => true, "color" => "red"}))
        .take();
    let expected = Delta::new()
        .retain(1, None)
        .retain(1, Some(attrs! {"bold" => true, "color" => "red"}))
        .take();
    assert_eq!(a.transform(&b, true), expected);
}

#[test]
fn insert_delete() {
    let a = Delta::new().insert("A", None).take();
    let b = Delta::new().delete(1).take();
    let expected = Delta::new().retain(1, None).delete(1).take();
    assert_eq!(a.transform(&b, true), expected);
}

#[test]
fn delete_insert() {
    let a = Delta::new().delete(1).take();
    let b = Delta::new().insert("B", None).take();
    let expected = Delta::new().insert("B", None).take();
    assert_eq!(a.transform(&b, true), expected);
}

#[test]
fn delete_retain() {
    let a = Delta::new().delete(1).take();
    let b = Delta::new()
        .retain(1, Some(attrs! {"bold" => true, "color" => "red"}))
        .take();
    assert_eq!(a.transform(&b, true), Delta::new());
}

#[test]
fn delete_delete() {
    let a = Delta::new().delete(1).take();
    let b = Delta::new().delete(1).take();
    assert_eq!(a.transform(&b, true), Delta::new());
}

#[test]
fn retain_insert() {
    let a = Delta::new().retain(1, Some(attrs! {"color" => "blue"})).take();
    let b = Delta::new().insert("B", None).take();
    let expected = Delta::new().insert("B", None).take();
    assert_eq!(a.transform(&b, true), expected);
}

#[test]
fn retain_retain() {
    let a = Delta::new().retain(1, Some(attrs! {"color" => "blue"})).take();
    let b = Delta::new()
        .retain(1, Some(attrs! {"bold" => true, "color" => "red"}))
        .take();
    let expected1 = Delta::new().retain(1, Some(attrs! {"bold" => true})).take();
    assert_eq!(a.transform(&b, true), expected1);
    assert_eq!(b.transform(&a, true), Delta::new());
}

#[test]
fn retain_retain_without_priority() {
    let a = Delta::new().retain(1, Some(attrs! {"color" => "blue"})).take();
    let b = Delta::new()
        .retain(1, Some(attrs! {"bold" => true, "color" => "red"}))
        .take();
    let expected1 = Delta::new()
        .retain(1, Some(attrs! {"bold" => true, "color" => "red"}))
        .take();
    let expected2 = Delta::new().retain(1, Some(attrs! {"color" => "blue"})).take();
    assert_eq!(a.transform(&b, false), expected1);
    assert_eq!(b.transform(&a, false), expected2);
}

#[test]
fn retain_delete() {
    let a = Delta::new().retain(1, Some(attrs! {"color" => "blue"})).take();
    let b = Delta::new().delete(1).take();
    let expected = Delta::new().delete(1).take();
    assert_eq!(a.transform(&b, true), expected);
}

#[test]
fn alternating_edits() {
    let a = Delta::new().retain(2, None).insert("si", None).delete(5).take();
    let b = Delta::new()
        .retain(1, None)
        .insert("e", None)
        .delete(5)
        .retain(1, None)
        .insert("ow", None)
        .take();
    let expected1 = Delta::new()
        .retain(1, None)
        .insert("e", None)
        .delete(1)
        .retain(2, None)
        .insert("ow", None)
        .take();
    let expected2 = Delta::new().retain(2, None).insert("si", None).delete(1).take();
    assert_eq!(a.transform(&b, false), expected1);
    assert_eq!(b.transform(&a, false), expected2);
}

#[test]
fn conflicting_appends() {
    let a = Delta::new().retain(3, None).insert("aa", None).take();
    let b = Delta::new().retain(3, None).insert("bb", None).take();
    let expected1 = Delta::new().retain(5, None).insert("bb", None).take();
    let expected2 = Delta::new().retain(3, None).insert("aa", None).take();
    assert_eq!(a.transform(&b, true), expected1);
    assert_eq!(b.transform(&a, false), expected2);
}

#[test]
fn prepend_and_append() {
    let a = Delta::new().insert("aa", None).take();
    let b = Delta::new().retain(3, None).insert("bb", None).take();
    let expected1 = Delta::new().retain(5, None).insert("bb", None).take();
    let expected2 = Delta::new().insert("aa", None).take();
    assert_eq!(a.transform(&b, false), expected1);
    assert_eq!(b.transform(&a, false), expected2);
}

#[test]
fn trailing_deletes_with_differing_lengths() {
    let a = Delta::new().retain(2, None).delete(1).take();
    let b = Delta::new().delete(3).take();
    let expected1 = Delta::new().delete(2).take();
    assert_eq!(a.transform(&b, false), expected1);
    assert_eq!(b.transform(&a, false), Delta::new());
}

#[test]
fn immutability() {
    let a1 = Delta::new().insert("A", None).take();
    let a2 = a1.clone();
    let b1 = Delta::new().insert("B", None).take();
    let b2 = b1.clone();
    let expected = Delta::new().retain(1, None).insert("B", None).take();
    assert_eq!(a1.transform(&b1, true), expected);
    assert_eq!(a1, a2);
    assert_eq!(b1, b2);
}

#[test]
fn position_insert_before() {
    let delta = Delta::new().insert("A", None).take();
    assert_eq!(delta.transform_position(2, true), 3);
}

#[test]
fn position_insert_after() {
    let delta = Delta::new().retain(2, None).insert("A", None).take();
    assert_eq!(delta.transform_position(1, true), 1);
}

#[test]
fn position_insert_at() {
    let delta = Delta::new().retain(2, None).insert("A", None).take();
    assert_eq!(delta.transform_position(2, true), 2);
    assert_eq!(delta.transform_position(2, false), 3);
}

#[test]
fn position_delete_before() {
    let delta = Delta::new().delete(2).take();
    assert_eq!(delta.transform_position(4, true), 2);
}

#[test]
fn position_delete_after() {
    let delta = Delta::new().retain(4, None).delete(2).take();
    assert_eq!(delta.transform_position(2, true), 2);
}

#[test]
fn position_delete_across() {
    let delta = Delta::new().retain(1, None).delete(4).take();
    assert_eq!(delta.transform_position(2, true), 1);
}

#[test]
fn position_insert_and_delete_before() {
    let delta = Delta::new().retain(2, None).insert("A", None).delete(2).take();
    assert_eq!(delta.transform_position(4, true), 3);
}

#[test]
fn position_insert_before_and_delete_across() {
    let delta = Delta::new().retain(2, None).insert("A", None).delete(4).take();
    assert_eq!(delta.transform_position(4, true), 3);
}

#[test]
fn position_delete_before_and_delete_across() {
    let delta = Delta::new().delete(1).retain(1, None).delete(4).take();
    assert_eq!(delta.transform_position(4, true), 1);
}
