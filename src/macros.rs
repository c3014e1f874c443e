//! The `record!` macro: declares a struct and derives its descriptor list.

/// Define a struct together with its [`Record`](crate::Record) impl.
///
/// Each field starts with a kind keyword:
///
/// - `value` — a leaf the engine coerces. The type must implement
///   [`Decode`](crate::Decode) and [`Encode`](crate::Encode).
/// - `record` — an embedded sub-record, recursed into with the same
///   source/sink. The type must implement `Record`.
/// - `skip` — present on the struct, invisible to the engine.
///
/// Annotations follow the type as `"tag" => "value"` literal pairs, mirroring
/// Go-style struct tags. The tag matching the source's tag name supplies the
/// lookup key; `default`, `required`, and `ignored` are recognized by the
/// engine; anything else is visible to sources through the field metadata.
///
/// ```
/// tagfig::record! {
///     #[derive(Debug, Default)]
///     pub struct ServerConfig {
///         pub value host: String ["env" => "HOST", "default" => "localhost"],
///         pub value port: u16 ["env" => "PORT", "required" => "true"],
///         pub value debug: bool ["env" => "DEBUG"],
///     }
/// }
///
/// let source = tagfig::MapSource::new("env").with("PORT", "8080");
/// let mut config = ServerConfig::default();
/// tagfig::process(&source, &mut config).unwrap();
/// assert_eq!(config.host, "localhost");
/// assert_eq!(config.port, 8080);
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fattr:meta])*
                $fvis:vis $kind:ident $fname:ident : $fty:ty
                    $([ $($tag:literal => $tagval:literal),* $(,)? ])?
            ),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        $vis struct $name {
            $(
                $(#[$fattr])*
                $fvis $fname : $fty,
            )+
        }

        impl $crate::Record for $name {
            fn fields(&self) -> ::std::vec::Vec<$crate::FieldRef<'_>> {
                let mut fields = ::std::vec::Vec::new();
                $(
                    $crate::__record_field!(
                        @ref fields, self, $kind $fname : $fty,
                        [ $($( $tag => $tagval ),*)? ]
                    );
                )+
                fields
            }

            fn fields_mut(&mut self) -> ::std::vec::Vec<$crate::FieldMut<'_>> {
                let mut fields = ::std::vec::Vec::new();
                $(
                    $crate::__record_field!(
                        @mut fields, self, $kind $fname : $fty,
                        [ $($( $tag => $tagval ),*)? ]
                    );
                )+
                fields
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __record_field {
    (@mut $out:ident, $self:ident, value $fname:ident : $fty:ty,
        [ $($tag:literal => $tagval:literal),* ]) => {
        $out.push($crate::FieldMut {
            meta: $crate::__record_field!(@meta $fname : $fty, [ $($tag => $tagval),* ]),
            target: $crate::Target::Value(&mut $self.$fname),
        });
    };
    (@mut $out:ident, $self:ident, record $fname:ident : $fty:ty,
        [ $($tag:literal => $tagval:literal),* ]) => {
        $out.push($crate::FieldMut {
            meta: $crate::__record_field!(@meta $fname : $fty, [ $($tag => $tagval),* ]),
            target: $crate::Target::Record(&mut $self.$fname),
        });
    };
    (@mut $out:ident, $self:ident, skip $fname:ident : $fty:ty,
        [ $($tag:literal => $tagval:literal),* ]) => {};

    (@ref $out:ident, $self:ident, value $fname:ident : $fty:ty,
        [ $($tag:literal => $tagval:literal),* ]) => {
        $out.push($crate::FieldRef {
            meta: $crate::__record_field!(@meta $fname : $fty, [ $($tag => $tagval),* ]),
            target: $crate::TargetRef::Value(&$self.$fname),
        });
    };
    (@ref $out:ident, $self:ident, record $fname:ident : $fty:ty,
        [ $($tag:literal => $tagval:literal),* ]) => {
        $out.push($crate::FieldRef {
            meta: $crate::__record_field!(@meta $fname : $fty, [ $($tag => $tagval),* ]),
            target: $crate::TargetRef::Record(&$self.$fname),
        });
    };
    (@ref $out:ident, $self:ident, skip $fname:ident : $fty:ty,
        [ $($tag:literal => $tagval:literal),* ]) => {};

    (@meta $fname:ident : $fty:ty, [ $($tag:literal => $tagval:literal),* ]) => {{
        static META: $crate::FieldMeta = $crate::FieldMeta {
            name: ::core::stringify!($fname),
            type_name: ::core::stringify!($fty),
            tags: &[ $( ($tag, $tagval) ),* ],
        };
        &META
    }};
}
