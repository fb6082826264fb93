use pretty_assertions::assert_eq;
use rowmap::{
    as_batch_values, params, Executor, MetadataIndex, Params, ParamsMapper, Record, Result, Row,
    RowMapper, Value,
};

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Person {
    #[key]
    #[column("ID")]
    id: i64,

    #[column("FIRST_NAME")]
    first_name: String,

    #[column("AGE")]
    age: i32,

    #[column("NICK")]
    nick: Option<String>,

    #[column("SECRET", write_only)]
    secret: String,

    #[column("VERSION", read_only)]
    version: i64,

    note: String,
}

fn ada() -> Person {
    Person {
        id: 1,
        first_name: "Ada".into(),
        age: 36,
        nick: None,
        secret: "s3cret".into(),
        version: 4,
        note: "not mapped".into(),
    }
}

/// Serves canned rows.
struct Canned(Vec<Params>);

impl Executor for Canned {
    fn execute(&self, _sql: &str, _params: &Params) -> Result<u64> {
        Ok(0)
    }

    fn query(
        &self,
        _sql: &str,
        _params: &Params,
        each: &mut dyn FnMut(&dyn Row) -> Result<()>,
    ) -> Result<()> {
        for row in &self.0 {
            each(row)?;
        }
        Ok(())
    }

    fn query_values(&self, _sql: &str, _params: &Params) -> Result<Vec<Vec<Value>>> {
        Ok(self
            .0
            .iter()
            .map(|row| row.iter().map(|(_, value)| value.clone()).collect())
            .collect())
    }
}

#[test]
fn to_params_keys_readable_columns() {
    let index = MetadataIndex::new();
    let params = ParamsMapper::with_index(&index).to_params(&ada()).unwrap();

    assert_eq!(
        params.names().collect::<Vec<_>>(),
        ["ID", "FIRST_NAME", "AGE", "NICK", "VERSION"]
    );
    assert_eq!(params.get("ID"), Some(&Value::I64(1)));
    assert_eq!(params.get("FIRST_NAME"), Some(&Value::from("Ada")));
    assert_eq!(params.get("AGE"), Some(&Value::I32(36)));
    assert_eq!(params.get("NICK"), Some(&Value::Null));
    assert_eq!(params.get("VERSION"), Some(&Value::I64(4)));
}

#[test]
fn batch_preserves_order() {
    let people: Vec<_> = (1..=3)
        .map(|id| Person {
            id,
            ..Person::default()
        })
        .collect();

    let batch = ParamsMapper::new().to_params_batch(&people).unwrap();
    let ids: Vec<_> = batch.iter().map(|p| p.get("ID").cloned()).collect();
    assert_eq!(
        ids,
        [Some(Value::I64(1)), Some(Value::I64(2)), Some(Value::I64(3))]
    );

    let boxed = as_batch_values(batch);
    assert_eq!(boxed.len(), 3);

    let empty: Vec<Person> = vec![];
    assert!(ParamsMapper::new().to_params_batch(&empty).unwrap().is_empty());
}

#[test]
fn round_trip_through_params() {
    let index = MetadataIndex::new();
    let mut row = ParamsMapper::with_index(&index).to_params(&ada()).unwrap();
    row.insert("SECRET", "s3cret");

    let mapped = RowMapper::<Person>::with_index(&index)
        .map_row(&row)
        .unwrap();

    assert!(mapped.is_complete());
    assert_eq!(
        mapped.record,
        Person {
            version: 0,
            note: String::new(),
            ..ada()
        }
    );
}

#[test]
fn type_mismatch_is_recorded_and_mapping_continues() {
    let row = params("ID", 9_i64)
        .param("FIRST_NAME", "Grace")
        .param("AGE", "old")
        .param("NICK", "amazing")
        .param("SECRET", "x");

    let mapped = RowMapper::<Person>::new().map_row(&row).unwrap();

    assert_eq!(mapped.failures.len(), 1);
    assert_eq!(mapped.failures[0].property, "age");
    assert_eq!(mapped.failures[0].column, "AGE");
    assert!(mapped.failures[0].error.is_type_conversion());

    assert_eq!(mapped.record.id, 9);
    assert_eq!(mapped.record.age, 0);
    assert_eq!(mapped.record.nick.as_deref(), Some("amazing"));

    // The lenient form drops the failure after logging it
    let person = RowMapper::<Person>::new().from_row(&row).unwrap();
    assert_eq!(person.first_name, "Grace");
}

#[test]
fn missing_column_aborts_the_row() {
    let row = params("ID", 9_i64).param("FIRST_NAME", "Grace");

    let err = RowMapper::<Person>::new().map_row(&row).unwrap_err();
    assert!(err.is_row_access());
    assert_eq!(err.to_string(), "failed to read column `AGE`: no such column");
}

#[test]
fn integer_column_rejects_text() {
    let row = params("ID", "nine")
        .param("FIRST_NAME", "Grace")
        .param("AGE", 1_i32)
        .param("NICK", Value::Null)
        .param("SECRET", "x");

    let err = RowMapper::<Person>::new().map_row(&row).unwrap_err();
    assert!(err.is_row_access());
}

#[test]
fn query_maps_every_row() {
    let rows = (1..=2)
        .map(|id| {
            params("ID", id as i64)
                .param("FIRST_NAME", format!("p{id}"))
                .param("AGE", 20_i32)
                .param("NICK", Value::Null)
                .param("SECRET", "x")
        })
        .collect();

    let people = RowMapper::<Person>::new()
        .query(&Canned(rows), "SELECT * FROM person", &Params::new())
        .unwrap();

    let names: Vec<_> = people.iter().map(|p| p.first_name.as_str()).collect();
    assert_eq!(names, ["p1", "p2"]);
}
