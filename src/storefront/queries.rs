//! GraphQL documents sent to the Storefront API.
//!
//! Kept as raw documents so the client stays schema-agnostic; the selected
//! fields correspond to the wire types in [`super::types`].

/// First six products with title, handle, description, minimum variant
/// price, and first image.
pub const PRODUCTS_QUERY: &str = r"
query Products {
  products(first: 6) {
    edges {
      node {
        title
        handle
        description
        priceRange {
          minVariantPrice {
            amount
          }
        }
        images(first: 1) {
          edges {
            node {
              transformedSrc
              altText
            }
          }
        }
      }
    }
  }
}
";

/// One product by handle with description HTML, price with currency,
/// first image, and first variant (id, price, title).
pub const PRODUCT_BY_HANDLE_QUERY: &str = r"
query ProductByHandle($handle: String!) {
  productByHandle(handle: $handle) {
    id
    title
    descriptionHtml
    priceRange {
      minVariantPrice {
        amount
        currencyCode
      }
    }
    images(first: 1) {
      edges {
        node {
          transformedSrc
          altText
        }
      }
    }
    variants(first: 1) {
      edges {
        node {
          id
          price {
            amount
            currencyCode
          }
          title
        }
      }
    }
  }
}
";

/// Cart creation returning the cart id, checkout URL, and user errors.
pub const CART_CREATE_MUTATION: &str = r"
mutation cartCreate($input: CartInput!) {
  cartCreate(input: $input) {
    cart {
      id
      checkoutUrl
    }
    userErrors {
      field
      message
    }
  }
}
";
