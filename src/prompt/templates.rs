//! A2UI templates the UI-mode instruction shows the model.

/// A named example payload: a JSON array of A2UI messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiTemplate {
    pub name: &'static str,
    pub json: &'static str,
}

/// Card list for five or fewer restaurants.
pub const SINGLE_COLUMN_LIST: UiTemplate = UiTemplate {
    name: "SINGLE_COLUMN_LIST_EXAMPLE",
    json: r##"[
  {"beginRendering": {"surfaceId": "default", "root": "root-column", "styles": {"primaryColor": "#FF0000", "font": "Roboto"}}},
  {"surfaceUpdate": {
    "surfaceId": "default",
    "components": [
      {"id": "root-column", "component": {"Column": {"children": {"explicitList": ["title-heading", "item-list"]}}}},
      {"id": "title-heading", "component": {"Heading": {"level": "1", "text": {"path": "title"}}}},
      {"id": "item-list", "component": {"List": {"direction": "vertical", "children": {"template": {"componentId": "item-card-template", "dataBinding": "/items"}}}}},
      {"id": "item-card-template", "component": {"Card": {"child": "card-layout"}}},
      {"id": "card-layout", "component": {"Row": {"children": {"explicitList": ["template-image", "card-details"]}}}},
      {"id": "template-image", "weight": 1, "component": {"Image": {"url": {"path": "imageUrl"}}}},
      {"id": "card-details", "weight": 2, "component": {"Column": {"children": {"explicitList": ["template-name", "template-rating", "template-detail", "template-link", "template-book-button"]}}}},
      {"id": "template-name", "component": {"Heading": {"level": "3", "text": {"path": "name"}}}},
      {"id": "template-rating", "component": {"Text": {"text": {"path": "rating"}}}},
      {"id": "template-detail", "component": {"Text": {"text": {"path": "detail"}}}},
      {"id": "template-link", "component": {"Text": {"text": {"path": "infoLink"}}}},
      {"id": "template-book-button", "component": {"Button": {
        "label": {"literalString": "Book Now"},
        "action": {"name": "book_restaurant", "context": [
          {"key": "restaurantName", "value": {"path": "name"}},
          {"key": "imageUrl", "value": {"path": "imageUrl"}},
          {"key": "address", "value": {"path": "address"}}
        ]}
      }}}
    ]
  }},
  {"dataModelUpdate": {
    "surfaceId": "default",
    "path": "/",
    "contents": [
      {"key": "title", "valueString": "Top Restaurants"},
      {"key": "items", "valueMap": [
        {"key": "item1", "valueMap": [
          {"key": "name", "valueString": "The Fancy Place"},
          {"key": "rating", "valueNumber": 4.8},
          {"key": "detail", "valueString": "Fine dining experience"},
          {"key": "infoLink", "valueString": "https://example.com/fancy"},
          {"key": "imageUrl", "valueString": "https://example.com/fancy.jpg"},
          {"key": "address", "valueString": "123 Main St"}
        ]}
      ]}
    ]
  }}
]"##,
};

/// Two card columns for more than five restaurants.
pub const TWO_COLUMN_LIST: UiTemplate = UiTemplate {
    name: "TWO_COLUMN_LIST_EXAMPLE",
    json: r##"[
  {"beginRendering": {"surfaceId": "default", "root": "root-column", "styles": {"primaryColor": "#FF0000", "font": "Roboto"}}},
  {"surfaceUpdate": {
    "surfaceId": "default",
    "components": [
      {"id": "root-column", "component": {"Column": {"children": {"explicitList": ["title-heading", "restaurant-row-1"]}}}},
      {"id": "title-heading", "component": {"Heading": {"level": "1", "text": {"path": "title"}}}},
      {"id": "restaurant-row-1", "component": {"Row": {"children": {"explicitList": ["item-card-1", "item-card-2"]}}}},
      {"id": "item-card-1", "weight": 1, "component": {"Card": {"child": "card-layout-1"}}},
      {"id": "card-layout-1", "component": {"Column": {"children": {"explicitList": ["template-image-1", "card-details-1"]}}}},
      {"id": "template-image-1", "component": {"Image": {"url": {"path": "/items/0/imageUrl"}}}},
      {"id": "card-details-1", "component": {"Column": {"children": {"explicitList": ["template-name-1", "template-rating-1", "template-book-button-1"]}}}},
      {"id": "template-name-1", "component": {"Heading": {"level": "3", "text": {"path": "/items/0/name"}}}},
      {"id": "template-rating-1", "component": {"Text": {"text": {"path": "/items/0/rating"}}}},
      {"id": "template-book-button-1", "component": {"Button": {
        "label": {"literalString": "Book Now"},
        "action": {"name": "book_restaurant", "context": [
          {"key": "restaurantName", "value": {"path": "/items/0/name"}},
          {"key": "imageUrl", "value": {"path": "/items/0/imageUrl"}},
          {"key": "address", "value": {"path": "/items/0/address"}}
        ]}
      }}},
      {"id": "item-card-2", "weight": 1, "component": {"Card": {"child": "card-layout-2"}}},
      {"id": "card-layout-2", "component": {"Column": {"children": {"explicitList": ["template-image-2", "card-details-2"]}}}},
      {"id": "template-image-2", "component": {"Image": {"url": {"path": "/items/1/imageUrl"}}}},
      {"id": "card-details-2", "component": {"Column": {"children": {"explicitList": ["template-name-2", "template-rating-2", "template-book-button-2"]}}}},
      {"id": "template-name-2", "component": {"Heading": {"level": "3", "text": {"path": "/items/1/name"}}}},
      {"id": "template-rating-2", "component": {"Text": {"text": {"path": "/items/1/rating"}}}},
      {"id": "template-book-button-2", "component": {"Button": {
        "label": {"literalString": "Book Now"},
        "action": {"name": "book_restaurant", "context": [
          {"key": "restaurantName", "value": {"path": "/items/1/name"}},
          {"key": "imageUrl", "value": {"path": "/items/1/imageUrl"}},
          {"key": "address", "value": {"path": "/items/1/address"}}
        ]}
      }}}
    ]
  }},
  {"dataModelUpdate": {
    "surfaceId": "default",
    "path": "/",
    "contents": [
      {"key": "title", "valueString": "Top Restaurants"},
      {"key": "items", "valueMap": [
        {"key": "0", "valueMap": [
          {"key": "name", "valueString": "The Fancy Place"},
          {"key": "rating", "valueNumber": 4.8},
          {"key": "imageUrl", "valueString": "https://example.com/fancy.jpg"},
          {"key": "address", "valueString": "123 Main St"}
        ]},
        {"key": "1", "valueMap": [
          {"key": "name", "valueString": "Quick Bites"},
          {"key": "rating", "valueNumber": 4.2},
          {"key": "imageUrl", "valueString": "https://example.com/quick.jpg"},
          {"key": "address", "valueString": "456 Oak Ave"}
        ]}
      ]}
    ]
  }}
]"##,
};

/// Reservation form shown after the user picks a restaurant.
pub const BOOKING_FORM: UiTemplate = UiTemplate {
    name: "BOOKING_FORM_EXAMPLE",
    json: r##"[
  {"beginRendering": {"surfaceId": "booking-form", "root": "booking-form-column", "styles": {"primaryColor": "#FF0000", "font": "Roboto"}}},
  {"surfaceUpdate": {
    "surfaceId": "booking-form",
    "components": [
      {"id": "booking-form-column", "component": {"Column": {"children": {"explicitList": ["booking-title", "restaurant-image", "restaurant-address", "party-size-field", "datetime-field", "dietary-field", "submit-button"]}}}},
      {"id": "booking-title", "component": {"Heading": {"text": {"path": "title"}}}},
      {"id": "restaurant-image", "component": {"Image": {"url": {"path": "imageUrl"}}}},
      {"id": "restaurant-address", "component": {"Text": {"text": {"path": "address"}}}},
      {"id": "party-size-field", "component": {"TextField": {"label": {"literalString": "Party Size"}, "text": {"path": "partySize"}, "type": "number"}}},
      {"id": "datetime-field", "component": {"DateTimeInput": {"label": {"literalString": "Date & Time"}, "value": {"path": "reservationTime"}, "enableDate": true, "enableTime": true}}},
      {"id": "dietary-field", "component": {"TextField": {"label": {"literalString": "Dietary Requirements"}, "text": {"path": "dietary"}}}},
      {"id": "submit-button", "component": {"Button": {
        "label": {"literalString": "Submit Reservation"},
        "action": {"name": "submit_booking", "context": [
          {"key": "restaurantName", "value": {"path": "restaurantName"}},
          {"key": "partySize", "value": {"path": "partySize"}},
          {"key": "reservationTime", "value": {"path": "reservationTime"}},
          {"key": "dietary", "value": {"path": "dietary"}},
          {"key": "imageUrl", "value": {"path": "imageUrl"}}
        ]}
      }}}
    ]
  }},
  {"dataModelUpdate": {
    "surfaceId": "booking-form",
    "path": "/",
    "contents": [
      {"key": "title", "valueString": "Book a Table at [RestaurantName]"},
      {"key": "address", "valueString": "[Restaurant Address]"},
      {"key": "restaurantName", "valueString": "[RestaurantName]"},
      {"key": "partySize", "valueString": "2"},
      {"key": "reservationTime", "valueString": ""},
      {"key": "dietary", "valueString": ""},
      {"key": "imageUrl", "valueString": ""}
    ]
  }}
]"##,
};

/// Summary shown after a booking is submitted.
pub const CONFIRMATION: UiTemplate = UiTemplate {
    name: "CONFIRMATION_EXAMPLE",
    json: r##"[
  {"beginRendering": {"surfaceId": "confirmation", "root": "confirmation-card", "styles": {"primaryColor": "#FF0000", "font": "Roboto"}}},
  {"surfaceUpdate": {
    "surfaceId": "confirmation",
    "components": [
      {"id": "confirmation-card", "component": {"Card": {"child": "confirmation-column"}}},
      {"id": "confirmation-column", "component": {"Column": {"children": {"explicitList": ["confirm-title", "confirm-image", "divider1", "confirm-details", "confirm-dietary", "divider2", "confirm-text"]}}}},
      {"id": "confirm-title", "component": {"Heading": {"level": "2", "text": {"path": "title"}}}},
      {"id": "confirm-image", "component": {"Image": {"url": {"path": "imageUrl"}}}},
      {"id": "confirm-details", "component": {"Text": {"text": {"path": "bookingDetails"}}}},
      {"id": "confirm-dietary", "component": {"Text": {"text": {"path": "dietaryRequirements"}}}},
      {"id": "confirm-text", "component": {"Heading": {"level": "5", "text": {"literalString": "We look forward to seeing you!"}}}},
      {"id": "divider1", "component": {"Divider": {}}},
      {"id": "divider2", "component": {"Divider": {}}}
    ]
  }},
  {"dataModelUpdate": {
    "surfaceId": "confirmation",
    "path": "/",
    "contents": [
      {"key": "title", "valueString": "Booking at [RestaurantName]"},
      {"key": "bookingDetails", "valueString": "[PartySize] people at [Time]"},
      {"key": "dietaryRequirements", "valueString": "Dietary Requirements: [Requirements]"},
      {"key": "imageUrl", "valueString": "[ImageUrl]"}
    ]
  }}
]"##,
};

/// Every template, in the order the instruction lists them.
pub const RESTAURANT_UI_EXAMPLES: &[UiTemplate] =
    &[SINGLE_COLUMN_LIST, TWO_COLUMN_LIST, BOOKING_FORM, CONFIRMATION];
