use record_store::{Record, Repository, StoreActor, StoreClient};

// --- Test Record ---

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct CaskId(u64);

impl From<u64> for CaskId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cask_{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
struct TypedCask {
    id: Option<CaskId>,
    name: String,
}

impl Record for TypedCask {
    type Id = CaskId;

    fn id(&self) -> Option<&CaskId> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: CaskId) {
        self.id = Some(id);
    }

    fn name(&self) -> &str {
        &self.name
    }
}

async fn through_trait<R: Repository<TypedCask>>(repository: &R) -> Vec<TypedCask> {
    repository.find_all().await.unwrap()
}

// --- Tests ---

#[tokio::test]
async fn test_store_full_lifecycle() {
    let (actor, client): (StoreActor<TypedCask>, StoreClient<TypedCask>) = StoreActor::new(10);
    let handle = tokio::spawn(actor.run());

    // 1. Insert
    let first = client
        .save(TypedCask {
            id: None,
            name: "oak".into(),
        })
        .await
        .unwrap();
    assert_eq!(first.id, Some(CaskId(1))); // First ID should be 1

    let second = client
        .save(TypedCask {
            id: None,
            name: "cherry".into(),
        })
        .await
        .unwrap();
    assert_eq!(second.id, Some(CaskId(2)));

    // 2. Lookups
    let by_name = client.find_by_name("cherry").await.unwrap();
    assert_eq!(by_name, Some(second.clone()));
    assert!(client.find_by_name("CHERRY").await.unwrap().is_none());
    assert_eq!(client.find_by_id(CaskId(1)).await.unwrap(), Some(first.clone()));

    // 3. Replace
    let renamed = TypedCask {
        name: "old oak".into(),
        ..first.clone()
    };
    let replaced = client.save(renamed.clone()).await.unwrap();
    assert_eq!(replaced, renamed);
    assert_eq!(through_trait(&client).await, vec![renamed, second.clone()]);

    // 4. Delete, including an absent id
    client.delete_by_id(CaskId(1)).await.unwrap();
    client.delete_by_id(CaskId(99)).await.unwrap();
    assert!(client.find_by_id(CaskId(1)).await.unwrap().is_none());
    assert_eq!(client.find_all().await.unwrap(), vec![second]);

    // 5. Shutdown once the last client is gone
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_closed_store_reports_actor_closed() {
    let (actor, client) = StoreActor::<TypedCask>::new(1);
    drop(actor);

    let result = client.find_all().await;
    assert_eq!(result, Err(record_store::StoreError::ActorClosed));
}

#[tokio::test]
async fn test_concurrent_saves_get_distinct_ids() {
    let (actor, client) = StoreActor::<TypedCask>::new(4);
    tokio::spawn(actor.run());

    let mut handles = vec![];
    for i in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .save(TypedCask {
                    id: None,
                    name: format!("cask-{i}"),
                })
                .await
                .unwrap()
        }));
    }

    let mut ids = vec![];
    for handle in handles {
        ids.push(handle.await.unwrap().id.unwrap());
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
    assert_eq!(ids.first(), Some(&CaskId(1)));
    assert_eq!(ids.last(), Some(&CaskId(20)));
}
