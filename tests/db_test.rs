mod common;

use std::collections::HashSet;

use common::{create_test_db, seeded_test_db};
use trivia::models::{Catalog, NewQuestion};

fn new_question(text: &str, category: i64) -> NewQuestion {
    NewQuestion {
        question: text.to_string(),
        answer: "yyy".to_string(),
        category,
        difficulty: 1,
    }
}

#[tokio::test]
async fn test_seed_loads_sample_catalog_once() {
    let db = create_test_db().await;
    let catalog = Catalog::sample().unwrap();

    assert!(db.seed(&catalog).await.unwrap());
    assert!(!db.seed(&catalog).await.unwrap());

    assert_eq!(db.categories().await.unwrap().len(), 6);
    assert_eq!(db.all_questions().await.unwrap().len(), 19);
}

#[tokio::test]
async fn test_categories_are_ordered_by_id() {
    let db = seeded_test_db().await;

    let categories = db.categories().await.unwrap();
    let ids: Vec<i64> = categories.iter().map(|c| c.id).collect();

    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(categories[0].name, "Science");
}

#[tokio::test]
async fn test_listing_is_stable_and_ordered() {
    let db = seeded_test_db().await;

    let first = db.all_questions().await.unwrap();
    let second = db.all_questions().await.unwrap();

    assert_eq!(first, second);
    assert!(first.windows(2).all(|w| w[0].id < w[1].id));
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let db = seeded_test_db().await;

    let hits = db.search_questions("cassius CLAY").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].answer, "Muhammad Ali");

    assert!(db.search_questions("Mike Tyson").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_folds_non_ascii_case() {
    let db = seeded_test_db().await;
    let created = db
        .insert_question(&new_question("Who painted the ÉTOILE series?", 2))
        .await
        .unwrap()
        .unwrap();

    for term in ["ÉTOILE", "étoile", "Étoile"] {
        let hits = db.search_questions(term).await.unwrap();
        assert_eq!(hits.len(), 1, "term {term}");
        assert_eq!(hits[0].id, created.id);
    }
}

#[tokio::test]
async fn test_empty_search_matches_everything() {
    let db = seeded_test_db().await;

    let hits = db.search_questions("").await.unwrap();
    assert_eq!(hits.len(), 19);
}

#[tokio::test]
async fn test_category_filter_is_exact() {
    let db = seeded_test_db().await;

    let science = db.questions_in_category(1).await.unwrap();
    let ids: Vec<i64> = science.iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![20, 21, 22]);

    assert!(db.questions_in_category(1000).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_question_ids_scope() {
    let db = seeded_test_db().await;

    assert_eq!(db.question_ids(Some(1)).await.unwrap(), vec![20, 21, 22]);
    assert_eq!(db.question_ids(None).await.unwrap().len(), 19);
}

#[tokio::test]
async fn test_insert_assigns_fresh_id() {
    let db = seeded_test_db().await;

    let created = db
        .insert_question(&new_question("sss", 5))
        .await
        .unwrap()
        .expect("category 5 exists");

    assert!(created.id > 23);
    assert_eq!(created.category, 5);
    assert_eq!(db.get_question(created.id).await.unwrap(), Some(created));
}

#[tokio::test]
async fn test_insert_unknown_category_writes_nothing() {
    let db = seeded_test_db().await;

    let created = db.insert_question(&new_question("orphan", 1000)).await.unwrap();

    assert!(created.is_none());
    assert_eq!(db.all_questions().await.unwrap().len(), 19);
    assert!(db.search_questions("orphan").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_twice() {
    let db = seeded_test_db().await;

    assert!(db.delete_question(9).await.unwrap());
    assert!(!db.delete_question(9).await.unwrap());
    assert_eq!(db.get_question(9).await.unwrap(), None);
}

#[tokio::test]
async fn test_deleted_ids_are_not_reused() {
    let db = seeded_test_db().await;

    let first = db.insert_question(&new_question("first", 1)).await.unwrap().unwrap();
    assert!(db.delete_question(first.id).await.unwrap());

    let second = db.insert_question(&new_question("second", 1)).await.unwrap().unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_concurrent_inserts_get_distinct_ids() {
    let db = seeded_test_db().await;

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let db = db.clone();
            tokio::spawn(async move {
                db.insert_question(&new_question(&format!("concurrent {i}"), 2))
                    .await
                    .unwrap()
                    .unwrap()
                    .id
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    assert_eq!(ids.len(), 20);
    assert_eq!(db.all_questions().await.unwrap().len(), 39);
}
