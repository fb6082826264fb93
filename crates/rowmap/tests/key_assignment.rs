use pretty_assertions::assert_eq;
use rowmap::{
    key::{QueryKeyGenerator, SequenceKeyGenerator, UuidKeyGenerator},
    Error, Executor, KeyAssigner, KeyGenerator, MetadataIndex, Params, Record, Result, Row, Value,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

#[derive(Debug, Default, Record)]
struct Person {
    #[key]
    #[column("ID")]
    id: i64,

    #[column("NAME")]
    name: String,
}

#[derive(Debug, Default, Record)]
struct Session {
    #[key]
    token: String,

    #[key]
    #[column("SHADOW", read_only)]
    shadow: String,
}

#[allow(non_snake_case)]
#[derive(Debug, Default, Record)]
struct Twin {
    id: i64,

    #[column("UPPER_ID")]
    ID: i64,
}

/// Answers every query with the same values.
struct KeyQuery(Vec<Vec<Value>>);

impl Executor for KeyQuery {
    fn execute(&self, _sql: &str, _params: &Params) -> Result<u64> {
        Ok(0)
    }

    fn query(
        &self,
        _sql: &str,
        _params: &Params,
        _each: &mut dyn FnMut(&dyn Row) -> Result<()>,
    ) -> Result<()> {
        rowmap::bail!("positional rows only")
    }

    fn query_values(&self, sql: &str, params: &Params) -> Result<Vec<Vec<Value>>> {
        assert!(params.is_empty());
        if sql.is_empty() {
            return Err(Error::driver(std::io::Error::other("connection reset")));
        }
        Ok(self.0.clone())
    }
}

/// Fails every other call.
#[derive(Default)]
struct Flaky {
    calls: AtomicUsize,
}

impl KeyGenerator for Flaky {
    fn generate_key(&self) -> Result<Value> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call % 2 == 1 {
            rowmap::bail!("generator unavailable");
        }
        Ok(Value::I64(call as i64 + 100))
    }
}

#[test]
fn assign_id_writes_query_key() {
    let generator = QueryKeyGenerator::new(
        "SELECT person_seq.nextval FROM dual",
        KeyQuery(vec![vec![Value::I64(42)]]),
    );
    let assigner = KeyAssigner::new(generator);

    let mut person = Person::default();
    let person = assigner.assign_id(&mut person, "id").unwrap();
    assert_eq!(person.id, 42);
}

#[test]
fn assign_id_matches_field_ignoring_case() {
    let index = MetadataIndex::new();
    let assigner = KeyAssigner::with_index(SequenceKeyGenerator::starting_at(7), &index);

    let mut person = Person::default();
    assigner.assign_id(&mut person, "Id").unwrap();
    assert_eq!(person.id, 7);
}

#[test]
fn assign_id_writes_every_case_variant() {
    let index = MetadataIndex::new();
    let assigner = KeyAssigner::with_index(SequenceKeyGenerator::starting_at(5), &index);

    let mut twin = Twin::default();
    assigner.assign_id(&mut twin, "id").unwrap();

    assert_eq!((twin.id, twin.ID), (5, 5));
    assert_eq!(assigner.generator().next_id(), 6);
}

#[test]
fn assign_id_without_matching_field_is_a_no_op() {
    let assigner = KeyAssigner::new(SequenceKeyGenerator::default());

    let mut person = Person {
        id: 3,
        name: "Ada".into(),
    };
    assigner.assign_id(&mut person, "missing").unwrap();

    assert_eq!(person.id, 3);
    assert_eq!(person.name, "Ada");
}

#[test]
fn assign_id_wraps_generator_failure() {
    let generator = QueryKeyGenerator::new("", KeyQuery(vec![]));
    let err = KeyAssigner::new(generator)
        .assign_id(&mut Person::default(), "id")
        .unwrap_err();

    assert!(err.is_key_assignment());
    assert!(err.cause().unwrap().is_key_generation());
    assert!(err.root().is_driver());
    assert_eq!(
        err.to_string(),
        "error assigning a new primary key value to key_assignment::Person: \
         key generation failed: key query failed: connection reset"
    );
}

#[test]
fn assign_id_wraps_writer_failure() {
    let err = KeyAssigner::new(UuidKeyGenerator)
        .assign_id(&mut Person::default(), "id")
        .unwrap_err();

    assert!(err.is_key_assignment());
    assert!(err.root().is_type_conversion());
}

#[test]
fn assign_ids_named_assigns_in_order() {
    let assigner = KeyAssigner::new(SequenceKeyGenerator::starting_at(10));
    let mut people: Vec<Person> = (0..3).map(|_| Person::default()).collect();

    assigner.assign_ids_named(&mut people, "ID").unwrap();

    let ids: Vec<_> = people.iter().map(|p| p.id).collect();
    assert_eq!(ids, [10, 11, 12]);
}

#[test]
fn assign_ids_fills_writable_key_properties() {
    let assigner = KeyAssigner::new(UuidKeyGenerator);
    let mut sessions: Vec<Session> = (0..2).map(|_| Session::default()).collect();

    let report = assigner.assign_ids(&mut sessions, &UuidKeyGenerator).unwrap();

    assert!(report.is_complete());
    assert_eq!(report.assigned, 2);
    for session in &sessions {
        assert!(session.token.parse::<Uuid>().is_ok());
        assert!(session.shadow.is_empty());
    }
    assert_ne!(sessions[0].token, sessions[1].token);
}

#[test]
fn assign_ids_records_failures_and_continues() {
    let assigner = KeyAssigner::new(SequenceKeyGenerator::default());
    let mut people: Vec<Person> = (0..3).map(|_| Person::default()).collect();

    let report = assigner.assign_ids(&mut people, &Flaky::default()).unwrap();

    assert_eq!(report.assigned, 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].index, 1);
    assert_eq!(report.failures[0].property, "id");
    assert_eq!(report.failures[0].error.to_string(), "generator unavailable");

    let ids: Vec<_> = people.iter().map(|p| p.id).collect();
    assert_eq!(ids, [100, 0, 102]);
}

#[test]
fn assign_ids_records_writer_failures() {
    let assigner = KeyAssigner::new(SequenceKeyGenerator::default());
    let mut people = vec![Person::default()];

    let report = assigner.assign_ids(&mut people, &UuidKeyGenerator).unwrap();

    assert!(!report.is_complete());
    assert!(report.failures[0].error.is_type_conversion());
    assert_eq!(people[0].id, 0);
}

#[test]
fn query_key_generator_widens_integers() {
    let generator = QueryKeyGenerator::new("SELECT 1", KeyQuery(vec![vec![Value::I32(5)]]));
    assert_eq!(generator.new_id().unwrap(), 5);
    assert_eq!(generator.generate_key().unwrap(), Value::I64(5));
}

#[test]
fn query_key_generator_rejects_malformed_results() {
    let cases = [
        (vec![], "expected 1 row from key query, got 0"),
        (
            vec![vec![Value::I64(1)], vec![Value::I64(2)]],
            "expected 1 row from key query, got 2",
        ),
        (
            vec![vec![Value::I64(1), Value::I64(2)]],
            "expected 1 column from key query, got 2",
        ),
        (
            vec![vec![Value::from("one")]],
            "expected an integer key, got String",
        ),
    ];

    for (rows, message) in cases {
        let err = QueryKeyGenerator::new("SELECT 1", KeyQuery(rows))
            .new_id()
            .unwrap_err();

        assert!(err.is_key_generation());
        assert_eq!(err.to_string(), format!("key generation failed: {message}"));
    }
}
