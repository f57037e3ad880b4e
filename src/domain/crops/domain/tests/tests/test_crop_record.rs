// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.
use cultivos::CropRecord;
use pretty_assertions::assert_eq;
use serde_json::json;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_crop_record_from_valid_object() {
    let record = CropRecord::from_json(&json!({
        "nombre": "Café",
        "descripcion": "Cultivo de ladera",
        "extra": 1,
    }));

    assert_eq!(record, Some(CropRecord::new("Café", "Cultivo de ladera")));
}

#[test]
fn test_crop_record_rejects_invalid_shapes() {
    let invalid = [
        json!("Café"),
        json!(["Café", "Cultivo"]),
        json!({ "nombre": "Café" }),
        json!({ "descripcion": "Cultivo" }),
        json!({ "nombre": 42, "descripcion": "Cultivo" }),
        json!({ "nombre": "Café", "descripcion": null }),
        json!({ "nombre": "   ", "descripcion": "Cultivo" }),
        json!({ "nombre": "Café", "descripcion": "" }),
    ];

    for value in invalid {
        assert_eq!(CropRecord::from_json(&value), None, "value: {value}");
    }
}

#[test]
fn test_crop_record_wire_names() {
    let value = serde_json::to_value(CropRecord::new("Maíz", "Grano básico")).unwrap();

    assert_eq!(value, json!({ "nombre": "Maíz", "descripcion": "Grano básico" }));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
