use anyhow::Result;
use sea_orm::DatabaseConnection;

use super::setup_test_db;
use crate::persona;

async fn seed(conn: &DatabaseConnection) -> Result<()> {
    persona::create(conn, "Ana", 30, "AR").await?;
    persona::create(conn, "Bob", 25, "US").await?;
    persona::create(conn, "Cat", 40, "AR").await?;
    Ok(())
}

#[tokio::test]
async fn create_assigns_increasing_ids() -> Result<()> {
    let conn = setup_test_db().await?;
    let a = persona::create(&conn, "Ana", 30, "AR").await?;
    let b = persona::create(&conn, "Ana", 30, "AR").await?;

    assert_eq!(a.name, "Ana");
    assert_eq!(a.age, 30);
    assert_eq!(a.nationality, "AR");
    // Duplicates are allowed; only the id tells them apart
    assert!(b.id > a.id);
    Ok(())
}

#[tokio::test]
async fn age_is_stored_as_given() -> Result<()> {
    let conn = setup_test_db().await?;
    let p = persona::create(&conn, "Old", -5, "XX").await?;
    let rows = persona::list(&conn, None, None).await?;
    assert_eq!(rows, vec![p]);
    assert_eq!(rows[0].age, -5);
    Ok(())
}

#[tokio::test]
async fn list_applies_limit_and_offset_in_id_order() -> Result<()> {
    let conn = setup_test_db().await?;
    seed(&conn).await?;

    let all = persona::list(&conn, None, None).await?;
    assert_eq!(all.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);

    let page = persona::list(&conn, Some(2), Some(1)).await?;
    assert_eq!(page.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(), vec!["Bob", "Cat"]);

    let first = persona::list(&conn, Some(1), None).await?;
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].id, 1);
    Ok(())
}

#[tokio::test]
async fn offset_without_limit_returns_the_rest() -> Result<()> {
    let conn = setup_test_db().await?;
    seed(&conn).await?;

    let rest = persona::list(&conn, None, Some(1)).await?;
    assert_eq!(rest.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 3]);

    let past_end = persona::list(&conn, None, Some(10)).await?;
    assert!(past_end.is_empty());
    Ok(())
}

#[tokio::test]
async fn ages_by_nationality_filters_exactly() -> Result<()> {
    let conn = setup_test_db().await?;
    seed(&conn).await?;
    persona::create(&conn, "Dan", 50, "ar").await?;

    let ar = persona::ages_by_nationality(&conn, "AR").await?;
    assert_eq!(ar, vec![(1, 30), (3, 40)]);

    let none = persona::ages_by_nationality(&conn, "BR").await?;
    assert!(none.is_empty());
    Ok(())
}
