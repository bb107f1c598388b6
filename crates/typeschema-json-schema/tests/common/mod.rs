//! Person and name types shared by the integration tests.

#![allow(dead_code)]

use typeschema::{
    Discriminator, EnumSchema, FloatSchema, HasSchema, IntegerSchema,
    InterfaceSchema, ListSchema, LiteralSchema, OneOfSchema, Schema, SchemaRegistry, ShapeSchema,
    StringFormat, StringSchema,
};

macro_rules! fixture {
    ($name:ident => $schema:expr) => {
        pub struct $name;

        impl HasSchema for $name {
            fn type_name() -> &'static str {
                stringify!($name)
            }

            fn schema() -> Schema {
                $schema.into()
            }
        }
    };
}

fixture!(GivenName => StringSchema::new()
    .description("First name of a person")
    .min_length(3)
    .max_length(20));

fixture!(FamilyName => StringSchema::new()
    .description("Last name of a person")
    .min_length(3)
    .max_length(20));

fixture!(Age => IntegerSchema::new()
    .description("The age of a person in years")
    .minimum(1)
    .maximum(120));

fixture!(FullName => ShapeSchema::new()
    .description("First and last name of a person")
    .property("givenName", GivenName::schema())
    .property("familyName", FamilyName::schema())
    .override_description("givenName", "Overridden given name description"));

fixture!(FullNames => ListSchema::new(FullName::schema()).min_count(2).max_count(5));

fixture!(NotMagic => StringSchema::new().pattern("^(?!magic).*"));

fixture!(EmailAddress => StringSchema::new().format(StringFormat::Email));

fixture!(Uuid => StringSchema::new().format(StringFormat::Uuid));

fixture!(Title => {
    let descriptions = [
        "for men, regardless of marital status, who do not have another professional or academic title",
        "for married women who do not have another professional or academic title",
        "for girls, unmarried women and married women who continue to use their maiden name",
        "for women, regardless of marital status or when marital status is unknown",
        "for any other title that does not match the above",
    ];
    let mut schema = EnumSchema::unbacked(["MR", "MRS", "MISS", "MS", "OTHER"])
        .description("honorific title of a person");
    for (case, description) in schema.cases.iter_mut().zip(descriptions) {
        case.description = Some(description.to_string());
    }
    schema
});

fixture!(Number => {
    let mut schema =
        EnumSchema::int_backed([("TWO", 2), ("FOUR", 4), ("FIVE", 5)]).description("A number");
    schema.cases[0].description = Some("The number 2".to_string());
    schema
});

fixture!(RomanNumber => EnumSchema::string_backed([
    ("I", "1"),
    ("II", "2"),
    ("III", "3"),
    ("IV", "4"),
]));

fixture!(ShapeWithOptionalTypes => ShapeSchema::new()
    .property("stringBased", FamilyName::schema())
    .optional_property("optionalStringBased", FamilyName::schema())
    .optional_property(
        "optionalInt",
        Schema::LiteralInteger(LiteralSchema::described("Some description")),
    )
    .optional_property("optionalBool", Schema::literal_boolean())
    .optional_property("optionalString", Schema::literal_string()));

fixture!(ShapeWithBool => ShapeSchema::new().property(
    "value",
    Schema::LiteralBoolean(LiteralSchema::described("Description for literal bool")),
));

fixture!(ShapeWithInt => ShapeSchema::new().property(
    "value",
    Schema::LiteralInteger(LiteralSchema::described("Description for literal int")),
));

fixture!(ShapeWithString => ShapeSchema::new().property(
    "value",
    Schema::LiteralString(LiteralSchema::described("Description for literal string")),
));

fixture!(NestedShape => ShapeSchema::new()
    .property("shapeWithOptionalTypes", ShapeWithOptionalTypes::schema())
    .property("shapeWithBool", ShapeWithBool::schema()));

fixture!(GeoCoordinates => ShapeSchema::new()
    .property("longitude", FloatSchema::new().minimum(-180.0).maximum(180.5))
    .property("latitude", FloatSchema::new().minimum(-90.0).maximum(90.0)));

fixture!(SomeInterface => InterfaceSchema::new()
    .description("SomeInterface description")
    .property("someMethod", Schema::literal_string())
    .optional_property("someOtherMethod", FamilyName::schema())
    .override_description("someMethod", "Custom description for \"someMethod\"")
    .override_description("someOtherMethod", "Custom description for \"someOtherMethod\"")
    .implementation(GivenName::schema())
    .implementation(FamilyName::schema())
    .implementation(FullName::schema()));

fixture!(SomeInterfaceWithDiscriminator => InterfaceSchema::new()
    .implementation(GivenName::schema())
    .implementation(FamilyName::schema())
    .discriminator(Discriminator::with_mapping(
        "type",
        [("given", "GivenName"), ("family", "FamilyName")],
    )));

fixture!(SomeShapeWithDiscriminatedUnionType => ShapeSchema::new().property(
    "name",
    OneOfSchema::new([GivenName::schema(), FamilyName::schema()]).discriminator(
        Discriminator::with_mapping("t", [("g", "GivenName"), ("f", "FamilyName")]),
    ),
));

fixture!(SomeShapeWithInterfaceProperty => ShapeSchema::new()
    .property("property", SomeInterfaceWithDiscriminator::schema()));

/// Registry holding every fixture, plus an opaque `DateTimeImmutable`.
pub fn registry() -> SchemaRegistry {
    let mut registry = SchemaRegistry::new();
    registry
        .register_type::<GivenName>()
        .register_type::<FamilyName>()
        .register_type::<Age>()
        .register_type::<FullName>()
        .register_type::<FullNames>()
        .register_type::<NotMagic>()
        .register_type::<EmailAddress>()
        .register_type::<Uuid>()
        .register_type::<Title>()
        .register_type::<Number>()
        .register_type::<RomanNumber>()
        .register_type::<ShapeWithOptionalTypes>()
        .register_type::<ShapeWithBool>()
        .register_type::<ShapeWithInt>()
        .register_type::<ShapeWithString>()
        .register_type::<NestedShape>()
        .register_type::<GeoCoordinates>()
        .register_type::<SomeInterface>()
        .register_type::<SomeInterfaceWithDiscriminator>()
        .register_type::<SomeShapeWithDiscriminatedUnionType>()
        .register_type::<SomeShapeWithInterfaceProperty>()
        .register_opaque("DateTimeImmutable");
    registry
}

