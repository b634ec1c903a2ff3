//! Integration tests for the complete remapping pipeline
//!
//! These tests build a small LDBC SNB shaped dataset on disk and verify:
//! - vertex tables are densified per entity type
//! - edge tables follow the vertex lookups across both groups
//! - aliases, continuous ranges and pass-through values
//!
//! Run with: cargo test --test integration_tests

use graphremap_core::{remap_dataset, RemapError};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

fn snb_fixture(root: &Path) {
    write(
        root,
        "static/vertices/Place.csv",
        "id|name|type\n1001|India|Country\n1002|Asia|Continent\n1003|Mumbai|City\n",
    );
    write(
        root,
        "static/vertices/Organisation.csv",
        "id|type|name\n77|University|IIT\n78|Company|Tata\n",
    );
    write(
        root,
        "static/edges/Place_isPartOf_Place.csv",
        "Place1Id|Place2Id\n1003|1001\n1001|1002\n",
    );
    write(
        root,
        "static/edges/Organisation_isLocatedIn_Place.csv",
        "OrganisationId|PlaceId\n77|1003\n78|1001\n",
    );

    write(
        root,
        "dynamic/vertices/Person.csv",
        "creationDate|id|firstName\nt0|50|Ana\nt1|10|Bo\nt2|50|Ana\nt3|30|Cy\n",
    );
    write(root, "dynamic/vertices/Comment.csv", "creationDate|id\nt0|7\nt1|7\nt2|9\n");
    write(root, "dynamic/vertices/Post.csv", "creationDate|id\nt0|2\nt1|2\n");
    write(
        root,
        "dynamic/edges/Person_likes_Comment.csv",
        "creationDate|PersonId|CommentId\nt5|50|9\nt6|999|7\n",
    );
    write(
        root,
        "dynamic/edges/Person_isLocatedIn_City.csv",
        "creationDate|PersonId|CityId\nt0|10|1003\n",
    );
    write(
        root,
        "dynamic/edges/Person_studyAt_University.csv",
        "creationDate|PersonId|UniversityId|classYear\nt0|30|77|2010\n",
    );
    write(
        root,
        "dynamic/edges/Comment_replyOf_Post.csv",
        "creationDate|CommentId|PostId\nt9|9|2\n",
    );
}

#[test]
fn test_snb_dataset_is_densified_in_place() {
    let dir = tempdir().unwrap();
    snb_fixture(dir.path());

    let report = remap_dataset(dir.path()).unwrap();

    let root = dir.path();
    assert_eq!(
        read(root, "static/vertices/Place.csv"),
        "id|name|type\n0|India|Country\n1|Asia|Continent\n2|Mumbai|City\n"
    );
    assert_eq!(
        read(root, "static/edges/Place_isPartOf_Place.csv"),
        "Place1Id|Place2Id\n2|0\n0|1\n"
    );
    assert_eq!(
        read(root, "static/edges/Organisation_isLocatedIn_Place.csv"),
        "OrganisationId|PlaceId\n0|2\n1|0\n"
    );

    assert_eq!(
        read(root, "dynamic/vertices/Person.csv"),
        "creationDate|id|firstName\nt0|0|Ana\nt1|1|Bo\nt2|0|Ana\nt3|2|Cy\n"
    );
    // Comment is listed before Post, so Post continues Comment's range.
    assert_eq!(read(root, "dynamic/vertices/Comment.csv"), "creationDate|id\nt0|0\nt1|0\nt2|1\n");
    assert_eq!(read(root, "dynamic/vertices/Post.csv"), "creationDate|id\nt0|2\nt1|2\n");

    assert_eq!(
        read(root, "dynamic/edges/Person_likes_Comment.csv"),
        "creationDate|PersonId|CommentId\nt5|0|1\nt6|999|0\n"
    );
    // Dynamic edges resolve static aliases (City -> Place, University -> Organisation).
    assert_eq!(
        read(root, "dynamic/edges/Person_isLocatedIn_City.csv"),
        "creationDate|PersonId|CityId\nt0|1|2\n"
    );
    assert_eq!(
        read(root, "dynamic/edges/Person_studyAt_University.csv"),
        "creationDate|PersonId|UniversityId|classYear\nt0|2|0|2010\n"
    );
    assert_eq!(
        read(root, "dynamic/edges/Comment_replyOf_Post.csv"),
        "creationDate|CommentId|PostId\nt9|1|2\n"
    );

    let dynamic = report.group("dynamic").unwrap();
    assert_eq!(dynamic.vertex_tables, 3);
    assert_eq!(dynamic.edge_tables, 4);
    assert_eq!(dynamic.endpoints_passed_through, 1);
    assert_eq!(report.totals().vertex_tables, 5);
}

#[test]
fn test_second_run_is_stable() {
    let dir = tempdir().unwrap();
    snb_fixture(dir.path());

    remap_dataset(dir.path()).unwrap();
    let person = read(dir.path(), "dynamic/vertices/Person.csv");
    let likes = read(dir.path(), "dynamic/edges/Person_likes_Comment.csv");

    remap_dataset(dir.path()).unwrap();
    assert_eq!(read(dir.path(), "dynamic/vertices/Person.csv"), person);
    assert_eq!(read(dir.path(), "dynamic/edges/Person_likes_Comment.csv"), likes);
}

#[test]
fn test_unknown_edge_type_aborts_the_run() {
    let dir = tempdir().unwrap();
    snb_fixture(dir.path());
    write(
        dir.path(),
        "static/edges/Tag_hasType_TagClass.csv",
        "TagId|TagClassId\n1|2\n",
    );

    let err = remap_dataset(dir.path()).unwrap_err();
    assert!(
        matches!(err, RemapError::MissingMapping { ref entity_type, .. } if entity_type == "Tag"),
        "unexpected error: {err}"
    );
    // Dynamic group never ran.
    assert_eq!(read(dir.path(), "dynamic/vertices/Post.csv"), "creationDate|id\nt0|2\nt1|2\n");
}

#[test]
fn test_malformed_edge_file_name_aborts_the_run() {
    let dir = tempdir().unwrap();
    snb_fixture(dir.path());
    write(dir.path(), "dynamic/edges/Person-knows-Person.csv", "a|b|c\nt|1|2\n");

    let err = remap_dataset(dir.path()).unwrap_err();
    assert!(matches!(err, RemapError::MalformedFileName { .. }), "unexpected error: {err}");
}

#[test]
fn test_missing_group_directory_is_reported() {
    let dir = tempdir().unwrap();
    write(dir.path(), "static/vertices/Tag.csv", "id\n5\n");
    write(dir.path(), "static/edges/Tag_hasTag_Tag.csv", "a|b\n5|5\n");

    let err = remap_dataset(dir.path()).unwrap_err();
    assert!(matches!(err, RemapError::MissingDirectory { .. }), "unexpected error: {err}");
    // The static group completed before the failure.
    assert_eq!(read(dir.path(), "static/vertices/Tag.csv"), "id\n0\n");
}
