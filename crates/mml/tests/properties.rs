use approx::assert_relative_eq;
use mml::*;
use proptest::prelude::*;

fn small_vec3() -> impl Strategy<Value = Vec3i> {
    prop::array::uniform3(-1000i32..1000).prop_map(Vector::from)
}

fn small_mat3() -> impl Strategy<Value = Mat3i> {
    prop::array::uniform3(prop::array::uniform3(-100i32..100)).prop_map(Matrix::from_rows)
}

fn real_vec4() -> impl Strategy<Value = Vec4d> {
    prop::array::uniform4(-100.0f64..100.0).prop_map(Vector::from)
}

proptest! {
    #[test]
    fn prefix_reads_back(prefix in any::<[i32; 3]>(), index in 0usize..5) {
        let v = Vector::<i32, 5>::from_prefix(prefix);
        let expected = prefix.get(index).copied().unwrap_or(0);
        prop_assert_eq!(v[index], expected);
        prop_assert_eq!(v.at(index), Ok(&expected));
    }

    #[test]
    fn out_of_range_access_fails(index in 4usize..1000) {
        let mut v = Vec4i::ZERO;
        prop_assert_eq!(v.at(index), Err(Error::VectorIndexOutOfBounds { index, len: 4 }));
        prop_assert!(v.set(index, 1).is_err());
        prop_assert!(v.is_zero());

        let empty = Vector::<i32, 0>::ZERO;
        prop_assert!(empty.at(index - 4).is_err());
    }

    #[test]
    fn widen_then_resize_is_lossless(v in small_vec3()) {
        prop_assert_eq!(v.widen::<7>().resize::<3>(), v);
        prop_assert_eq!(v.resize::<2>(), vec2(v[0], v[1]));
        prop_assert_eq!(v.resize::<1>(), vec1(v[0]));
    }

    #[test]
    fn dot_is_squared_length(v in real_vec4()) {
        let length = v.length();
        assert_relative_eq!(v.dot(v), length * length, max_relative = 1e-12);
        assert_relative_eq!(v.length2(), v.dot(v));
    }

    #[test]
    fn normalized_has_unit_length(v in real_vec4()) {
        prop_assume!(v.length() > 1e-3);
        assert_relative_eq!(v.normalized().length(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn cross_is_anticommutative(a in small_vec3(), b in small_vec3()) {
        prop_assert_eq!(a.cross(b), -b.cross(a));
        prop_assert_eq!(a.cross(HVec3::new(b.into_array())), a.cross(b));
    }

    #[test]
    fn identity_is_neutral(m in small_mat3()) {
        prop_assert_eq!(Mat3i::identity() * m, m);
        prop_assert_eq!(m * Mat3i::identity(), m);
    }

    #[test]
    fn product_is_associative(a in small_mat3(), b in small_mat3(), c in small_mat3()) {
        prop_assert_eq!((a * b) * c, a * (b * c));
        prop_assert_eq!((a * b).transpose(), b.transpose() * a.transpose());
    }

    #[test]
    fn vector_sum(a in small_vec3(), b in small_vec3()) {
        let sum = a + b;
        for i in 0..3 {
            prop_assert_eq!(sum[i], a[i] + b[i]);
        }
        prop_assert_eq!(sum - b, a);
    }

    #[test]
    fn chained_translations_add_up(a in small_vec3(), b in small_vec3()) {
        let t = translation(a).translate(b);
        prop_assert_eq!(t.transform_point(Vec3::ZERO), a + b);
        prop_assert_eq!(t.transform_direction(a), a);
    }

    #[test]
    fn well_ordered_projections(
        l in -100.0f32..-1.0, r in 1.0f32..100.0,
        b in -100.0f32..-1.0, t in 1.0f32..100.0,
        n in 0.1f32..10.0, depth in 1.0f32..1000.0
    ) {
        let f = n + depth;
        let p = perspective_projection(l, r, b, t, n, f).unwrap();
        prop_assert_eq!(p[(3, 2)], -1.0);
        let o = orthographic_projection(l, r, b, t, n, f).unwrap();
        prop_assert!(o[(2, 2)] < 0.0);

        prop_assert!(perspective_projection(l, l, b, t, n, f).is_err());
        prop_assert!(orthographic_projection(l, r, b, t, n, n).is_err());
    }
}

#[test]
fn vector_sum_example() {
    assert_eq!(vec3(1, 2, 3) + vec3(4, 5, 6), vec3(5, 7, 9));
}

#[test]
fn translation_example() {
    let t = translation(vec3(1, 0, 0)).translate(vec3(0, 1, 0));
    assert_eq!(t.transform_point(vec3(0, 0, 0)), vec3(1, 1, 0));
}
