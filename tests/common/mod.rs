//! Shared fixture: an in-memory record store with an authors/books schema.
//!
//! `authors -< book_authors >- books` is the many-to-many (via) relation,
//! `books -< chapters` the direct one. The `account`/`account_tag`/`tag`
//! schema exercises a two-column link mapping (tenant-scoped junction).

#![allow(dead_code)]

use core::cmp::Ordering;

use nested_rest::{
    ModelMeta, ModelRegistry, NestedContext, ParamMap, Query, Record, RecordStore, RelationDef,
    RelationRegistry, Result, SortDirection, Value, ViaDef,
};

#[derive(Debug, Clone)]
pub struct Row {
    model: &'static str,
    values: Vec<(&'static str, Value)>,
}

impl Row {
    pub fn new(model: &'static str, values: Vec<(&'static str, Value)>) -> Self {
        Self { model, values }
    }
}

impl Record for Row {
    fn model(&self) -> &'static str {
        self.model
    }

    fn get(&self, column: &str) -> Option<Value> {
        self.values
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, value)| value.clone())
    }

    fn clone_record(&self) -> Box<dyn Record> {
        Box::new(self.clone())
    }
}

pub struct MemoryStore {
    pub models: ModelRegistry,
    rows: Vec<Row>,
}

impl MemoryStore {
    pub fn new(models: ModelRegistry) -> Self {
        Self {
            models,
            rows: Vec::new(),
        }
    }

    pub fn insert(&mut self, model: &'static str, values: Vec<(&'static str, Value)>) {
        self.rows.push(Row::new(model, values));
    }

    fn rows_of<'a>(&'a self, model: &'a str) -> impl Iterator<Item = &'a Row> {
        self.rows.iter().filter(move |row| row.model == model)
    }

    fn junction_filter(
        rows: &mut Vec<Row>,
        junction: Vec<&Row>,
        link: &[(&'static str, &'static str)],
    ) {
        rows.retain(|target| {
            junction.iter().any(|j| {
                link.iter().all(|(target_col, junction_col)| {
                    match (target.get(target_col), j.get(junction_col)) {
                        (Some(a), Some(b)) => a.loose_eq(&b),
                        _ => false,
                    }
                })
            })
        });
    }
}

impl RecordStore for MemoryStore {
    fn find_by_primary_key(&self, model: &str, id: &Value) -> Result<Option<Box<dyn Record>>> {
        let pk = self.models.primary_key(model)?;
        Ok(self
            .rows_of(model)
            .find(|row| row.get(pk).is_some_and(|value| value.loose_eq(id)))
            .map(|row| row.clone_record()))
    }

    fn fetch(&self, query: &Query) -> Result<Vec<Box<dyn Record>>> {
        let mut rows: Vec<Row> = self.rows_of(query.target).cloned().collect();

        if let Some(via) = &query.via {
            let junction: Vec<&Row> = self
                .rows_of(via.junction)
                .filter(|row| via.filter.matches(*row))
                .collect();
            Self::junction_filter(&mut rows, junction, via.link);
        }

        for join in &query.joins {
            let junction: Vec<&Row> = self
                .rows_of(join.junction)
                .filter(|row| join.on.matches(*row))
                .collect();
            Self::junction_filter(&mut rows, junction, join.link);
        }

        if let Some(condition) = &query.condition {
            rows.retain(|row| condition.matches(row));
        }

        if !query.order.is_empty() {
            rows.sort_by(|a, b| {
                for order in &query.order {
                    let left = a.get(&order.column).unwrap_or(Value::Null);
                    let right = b.get(&order.column).unwrap_or(Value::Null);
                    let mut ordering = cmp_values(&left, &right);
                    if order.direction == SortDirection::Descending {
                        ordering = ordering.reverse();
                    }
                    if ordering != Ordering::Equal {
                        return ordering;
                    }
                }
                Ordering::Equal
            });
        }

        let sliced = rows
            .into_iter()
            .skip(query.offset.unwrap_or(0) as usize)
            .take(query.limit.map_or(usize::MAX, |limit| limit as usize));
        Ok(sliced.map(|row| Box::new(row) as Box<dyn Record>).collect())
    }
}

fn cmp_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Integer(x), Value::Integer(y)) => x.cmp(y),
        (Value::Text(x), Value::Text(y)) => x.cmp(y),
        (Value::Real(x), Value::Real(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        _ => a.to_string().cmp(&b.to_string()),
    }
}

pub fn model_registry() -> ModelRegistry {
    let mut models = ModelRegistry::new();
    for (name, primary_key) in [
        ("author", "id"),
        ("book", "id"),
        ("book_author", "id"),
        ("chapter", "id"),
        ("account", "id"),
        ("account_tag", "id"),
        ("tag", "id"),
    ] {
        models.register(ModelMeta { name, primary_key });
    }
    models
}

pub fn relation_registry() -> RelationRegistry {
    let mut relations = RelationRegistry::new();
    relations.register(RelationDef {
        name: "books",
        source: "author",
        target: "book",
        link: &[("id", "book_id")],
        via: Some(ViaDef {
            name: "bookAuthors",
            junction: "book_author",
            link: &[("author_id", "id")],
        }),
    });
    relations.register(RelationDef {
        name: "chapters",
        source: "book",
        target: "chapter",
        link: &[("book_id", "id")],
        via: None,
    });
    relations.register(RelationDef {
        name: "tags",
        source: "account",
        target: "tag",
        link: &[("id", "tag_id")],
        via: Some(ViaDef {
            name: "accountTags",
            junction: "account_tag",
            link: &[("org_id", "org_id"), ("account_id", "id")],
        }),
    });
    relations
}

/// Authors 1 and 2 share book 2; author 3 has no books; book 4 is unrelated
/// to everyone. Book 1 has two chapters. The account junction is keyed by
/// `(org_id, account_id)`: account 1 lives in org 1 and carries tags 1 and 2;
/// the `(org 2, account 1, tag 3)` junction row belongs to another org and
/// must stay invisible to it.
pub fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new(model_registry());

    for (id, name) in [(1, "Tolkien"), (2, "Martin"), (3, "Unpublished")] {
        store.insert(
            "author",
            vec![("id", Value::Integer(id)), ("name", Value::from(name))],
        );
    }

    for (id, title) in [
        (1, "The Hobbit"),
        (2, "Anthology"),
        (3, "Silmarillion"),
        (4, "Orphaned Volume"),
    ] {
        store.insert(
            "book",
            vec![("id", Value::Integer(id)), ("title", Value::from(title))],
        );
    }

    for (id, author_id, book_id) in [(1, 1, 1), (2, 1, 2), (3, 1, 3), (4, 2, 2)] {
        store.insert(
            "book_author",
            vec![
                ("id", Value::Integer(id)),
                ("author_id", Value::Integer(author_id)),
                ("book_id", Value::Integer(book_id)),
            ],
        );
    }

    for (id, book_id, title) in [(1, 1, "An Unexpected Party"), (2, 1, "Roast Mutton"), (3, 2, "Foreword")] {
        store.insert(
            "chapter",
            vec![
                ("id", Value::Integer(id)),
                ("book_id", Value::Integer(book_id)),
                ("title", Value::from(title)),
            ],
        );
    }

    store.insert(
        "account",
        vec![("id", Value::Integer(1)), ("org_id", Value::Integer(1))],
    );

    for (id, label) in [(1, "alpha"), (2, "beta"), (3, "gamma")] {
        store.insert(
            "tag",
            vec![("id", Value::Integer(id)), ("label", Value::from(label))],
        );
    }

    for (id, org_id, account_id, tag_id) in [(1, 1, 1, 1), (2, 1, 1, 2), (3, 2, 1, 3)] {
        store.insert(
            "account_tag",
            vec![
                ("id", Value::Integer(id)),
                ("org_id", Value::Integer(org_id)),
                ("account_id", Value::Integer(account_id)),
                ("tag_id", Value::Integer(tag_id)),
            ],
        );
    }

    store
}

pub fn params(pairs: &[(&str, &str)]) -> ParamMap {
    pairs
        .iter()
        .map(|(key, value)| ((*key).into(), (*value).into()))
        .collect()
}

pub fn author_ctx(id: &str) -> NestedContext {
    NestedContext::from_params(&params(&[
        ("relativeClass", "author"),
        ("relationName", "books"),
        ("linkAttribute", "authorId"),
        ("authorId", id),
    ]))
    .unwrap()
}

pub fn book_ctx(id: &str) -> NestedContext {
    NestedContext::from_params(&params(&[
        ("relativeClass", "book"),
        ("relationName", "chapters"),
        ("linkAttribute", "bookId"),
        ("bookId", id),
    ]))
    .unwrap()
}

/// Primary-key values of the fetched records, in fetch order.
pub fn ids(records: &[Box<dyn Record>]) -> Vec<i64> {
    records
        .iter()
        .map(|record| match record.get("id") {
            Some(Value::Integer(id)) => id,
            other => panic!("expected integer id, got {other:?}"),
        })
        .collect()
}
